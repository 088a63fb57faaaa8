//! HTML rendering with maud.
//!
//! Every function here is pure: it reads the catalog and whatever view state
//! is passed in and returns markup. Lifecycle lives in [`crate::view`].

mod home;
mod pages;

pub use home::home_page;
pub use pages::{contact_page, history_page, menu_page, not_found_page, shop_page};

use maud::{html, Markup, DOCTYPE};

use crate::catalog::Catalog;
use crate::data::ContactInfo;
use crate::nav::{NavStyle, Route, NAV_ITEMS, SCROLL_THRESHOLD};

/// Document shell shared by every page.
pub(crate) fn layout(catalog: &Catalog, title: &str, body: Markup) -> Markup {
    let site = catalog.site();
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (site.name) }
            }
            body { (body) }
        }
    }
}

pub(crate) fn navigation(catalog: &Catalog, current: Option<Route>, style: NavStyle) -> Markup {
    html! {
        nav class=(style.css_class()) data-scroll-threshold=(SCROLL_THRESHOLD) {
            a.brand href="/" { (catalog.site().name) }
            ul.nav-links {
                @for item in &NAV_ITEMS {
                    @let active = current.map_or(false, |route| item.is_active(route));
                    li {
                        a class=[active.then_some("active")] href=(item.path) { (item.label) }
                    }
                }
            }
        }
    }
}

/// Banner with a background photo, used by every subpage.
pub(crate) fn page_header(image: &str, title: &str, subtitle: &str) -> Markup {
    html! {
        header.page-header style=(format!("background-image: url({image})")) {
            h1 { (title) }
            p { (subtitle) }
        }
    }
}

pub(crate) fn contact_lines(contact: &ContactInfo) -> Markup {
    html! {
        ul.contact-lines {
            li.phone { a href=(format!("tel:{}", dial_digits(&contact.phone))) { (contact.phone) } }
            li.email { a href=(format!("mailto:{}", contact.email)) { (contact.email) } }
            li.address {
                @for line in &contact.address {
                    p { (line) }
                }
            }
            li.hours {
                @for line in &contact.hours {
                    p { (line) }
                }
            }
        }
    }
}

pub(crate) fn footer(catalog: &Catalog) -> Markup {
    let site = catalog.site();
    let contact = catalog.contact();
    html! {
        footer.site-footer {
            div {
                h3 { (site.name) }
                p { (site.tagline) }
            }
            div {
                h4 { "Quick Links" }
                ul {
                    @for item in NAV_ITEMS.iter().skip(1) {
                        li { a href=(item.path) { (item.label) } }
                    }
                }
            }
            div {
                h4 { "Contact Info" }
                p { (contact.phone) }
                p { (contact.email) }
                @for line in &contact.address {
                    p { (line) }
                }
            }
            p.copyright { "© " (site.copyright_year) " " (site.name) ". All rights reserved." }
        }
    }
}

fn dial_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_marks_active_link() {
        let catalog = Catalog::builtin().unwrap();
        let nav = navigation(&catalog, Some(Route::Menu), NavStyle::Overlay).into_string();
        assert!(nav.contains(r#"<a class="active" href="/menu">Menu</a>"#));
        assert!(nav.contains(r#"<a href="/">Home</a>"#));
        assert!(nav.contains("nav nav-overlay"));
        assert_eq!(nav.matches(r#"class="active""#).count(), 1);

        let nav = navigation(&catalog, None, NavStyle::Elevated).into_string();
        assert!(nav.contains("nav nav-elevated"));
        assert!(!nav.contains(r#"class="active""#));
    }

    #[test]
    fn test_contact_links() {
        let catalog = Catalog::builtin().unwrap();
        let markup = contact_lines(catalog.contact()).into_string();
        assert!(markup.contains(r#"href="mailto:info@belgianwaffle.com""#));
        assert!(markup.contains(r#"href="tel:9093375222""#));
        assert!(markup.contains("Lake Arrowhead, CA 92352"));
    }

    #[test]
    fn test_footer_quick_links() {
        let catalog = Catalog::builtin().unwrap();
        let markup = footer(&catalog).into_string();
        for path in ["/menu", "/history", "/contact", "/shop"] {
            assert!(markup.contains(&format!(r#"href="{path}""#)), "{path}");
        }
        assert!(markup.contains("All rights reserved."));
    }
}
