//! Read-only site content, loaded once at startup.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;

use crate::data::{
    ContactInfo, GalleryImage, History, MenuCategory, Product, SiteContent, SiteInfo, Testimonial,
};
use crate::error::SiteError;

const BUILTIN_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug)]
pub struct Catalog {
    content: SiteContent,
}

impl Catalog {
    /// Content compiled into the binary.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_CONTENT).context("fail to parse builtin site content")
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("fail to read site content {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("fail to load site content {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let content: SiteContent = serde_json::from_str(raw)?;
        validate(&content)?;
        tracing::debug!(
            categories = content.menu.len(),
            testimonials = content.testimonials.len(),
            products = content.products.len(),
            "site content loaded"
        );
        Ok(Self { content })
    }

    pub fn site(&self) -> &SiteInfo {
        &self.content.site
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        &self.content.gallery
    }

    pub fn history(&self) -> &History {
        &self.content.history
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.content.contact
    }

    /// Categories in tab order.
    pub fn categories(&self) -> &[MenuCategory] {
        &self.content.menu
    }

    /// The first tab. Validation guarantees there is one.
    pub fn default_category(&self) -> &MenuCategory {
        &self.content.menu[0]
    }

    pub fn category(&self, key: &str) -> Result<&MenuCategory, SiteError> {
        self.content
            .menu
            .iter()
            .find(|category| category.key == key)
            .ok_or_else(|| SiteError::UnknownCategory(key.to_string()))
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.content.testimonials
    }

    pub fn products(&self) -> &[Product] {
        &self.content.products
    }
}

fn validate(content: &SiteContent) -> Result<(), SiteError> {
    if content.menu.is_empty() {
        return Err(SiteError::InvalidContent("menu has no category".into()));
    }

    let mut keys = HashSet::new();
    for category in &content.menu {
        if category.key.is_empty() {
            return Err(SiteError::InvalidContent(format!(
                "category `{}` has an empty key",
                category.title
            )));
        }
        if !keys.insert(category.key.as_str()) {
            return Err(SiteError::InvalidContent(format!(
                "duplicated category key `{}`",
                category.key
            )));
        }
    }

    if let Some(bad) = content
        .testimonials
        .iter()
        .find(|t| !(1..=5).contains(&t.rating))
    {
        return Err(SiteError::InvalidContent(format!(
            "rating of `{}` must be within 1..=5, got {}",
            bad.name, bad.rating
        )));
    }

    let mut ids = HashSet::new();
    for product in &content.products {
        if !ids.insert(product.id.as_str()) {
            return Err(SiteError::InvalidContent(format!(
                "duplicated product id `{}`",
                product.id
            )));
        }
    }

    Ok(())
}
