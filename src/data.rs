use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub gallery: Vec<GalleryImage>,
    pub history: History,
    pub contact: ContactInfo,
    pub menu: Vec<MenuCategory>,
    pub testimonials: Vec<Testimonial>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    pub hero_title: String,
    pub hero_text: String,
    pub hero_image: String,
    pub established: u16,
    pub copyright_year: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    pub teaser_image: String,
    pub teaser: Vec<String>,
    pub banner_image: String,
    pub sections: Vec<HistorySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySection {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    /// postal address, one line per entry
    pub address: Vec<String>,
    pub hours: Vec<String>,
    pub large_party_note: String,
    pub map_image: String,
}

/// One tab on the menu page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    /// pre-formatted, e.g. "$12.95"
    pub price: String,
    #[serde(default)]
    pub popular: bool,
    /// inline data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub rating: u8,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub popular: bool,
}
