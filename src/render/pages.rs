use maud::{html, Markup};

use crate::catalog::Catalog;
use crate::data::{MenuItem, Product};
use crate::menu::{MenuListing, MenuView, NO_ITEMS_MESSAGE};
use crate::nav::{NavStyle, Route};

use super::{contact_lines, footer, layout, navigation, page_header};

const MENU_BANNER: &str = "https://images.unsplash.com/photo-1719837918315-6d81597c8673?crop=entropy&cs=srgb&fm=jpg&ixlib=rb-4.1.0&q=85";
const SHOP_BANNER: &str = "https://images.pexels.com/photos/4109466/pexels-photo-4109466.jpeg";

/// The tab bar and the search box share one GET form. The first submit
/// button resubmits the current category, so pressing enter in the search box
/// keeps the tab, and clicking a tab keeps the search text.
fn menu_controls(view: &MenuView) -> Markup {
    html! {
        form.menu-controls method="get" action=(Route::Menu.path()) {
            input type="search" name="q" value=(view.search()) placeholder="Search the menu";
            button.search type="submit" name="category" value=(view.category_key()) { "Search" }
            div.tabs role="tablist" {
                @for category in view.categories() {
                    @let selected = category.key == view.category_key();
                    button type="submit" name="category" value=(category.key)
                        class=(if selected { "tab tab-active" } else { "tab" })
                        aria-selected=(if selected { "true" } else { "false" }) {
                        (category.title)
                    }
                }
            }
        }
    }
}

fn menu_item_card(item: &MenuItem) -> Markup {
    html! {
        article.menu-item {
            @if let Some(image) = &item.image {
                img src=(image) alt=(item.name);
            }
            div.menu-item-heading {
                h3 { (item.name) }
                span.price { (item.price) }
            }
            @if item.popular {
                span.badge { "Popular" }
            }
            p { (item.description) }
        }
    }
}

pub fn menu_page(catalog: &Catalog, view: &MenuView, style: NavStyle) -> Markup {
    let category = view.category();
    let body = html! {
        (navigation(catalog, Some(Route::Menu), style))
        (page_header(
            MENU_BANNER,
            "Our Menu",
            "Come join us in Lake Arrowhead Village for breakfast, including 17 specialty waffles and lunch!",
        ))
        main.menu {
            (menu_controls(view))
            section.menu-category {
                h2 { (category.title) }
                @if let Some(note) = &category.note {
                    p.note { (note) }
                }
                @match view.listing() {
                    MenuListing::Items(items) => {
                        div.menu-items {
                            @for item in items {
                                (menu_item_card(item))
                            }
                        }
                    }
                    MenuListing::Empty => {
                        p.empty { (NO_ITEMS_MESSAGE) }
                    }
                }
            }
        }
        (footer(catalog))
    };
    layout(catalog, "Menu", body)
}

pub fn history_page(catalog: &Catalog, style: NavStyle) -> Markup {
    let history = catalog.history();
    let body = html! {
        (navigation(catalog, Some(Route::History), style))
        (page_header(
            &history.banner_image,
            "Our History",
            "A legacy of serving the Lake Arrowhead community for over 40 years",
        ))
        main.history {
            @for section in &history.sections {
                section {
                    h2 { (section.heading) }
                    @for paragraph in &section.paragraphs {
                        p { (paragraph) }
                    }
                }
            }
        }
        (footer(catalog))
    };
    layout(catalog, "Our History", body)
}

pub fn contact_page(catalog: &Catalog, style: NavStyle) -> Markup {
    let contact = catalog.contact();
    let body = html! {
        (navigation(catalog, Some(Route::Contact), style))
        (page_header(
            &contact.map_image,
            "Contact Us",
            "We'd love to hear from you! Get in touch with us today.",
        ))
        main.contact-page {
            section {
                h2 { "Get In Touch" }
                (contact_lines(contact))
                div.large-parties {
                    h3 { "Large Parties" }
                    p { (contact.large_party_note) }
                }
            }
            img src=(contact.map_image) alt="Lake Arrowhead Village Location";
        }
        (footer(catalog))
    };
    layout(catalog, "Contact", body)
}

fn product_card(product: &Product) -> Markup {
    html! {
        article.product id=(product.id) {
            img src=(product.image) alt=(product.name);
            h3 { (product.name) }
            @if product.popular {
                span.badge { "Popular" }
            }
            p { (product.description) }
            div.product-footer {
                span.price { (product.price) }
                // no cart behind this button
                button type="button" { "Add to Cart" }
            }
        }
    }
}

pub fn shop_page(catalog: &Catalog, style: NavStyle) -> Markup {
    let body = html! {
        (navigation(catalog, Some(Route::Shop), style))
        (page_header(
            SHOP_BANNER,
            "Shop",
            &format!("Take a piece of {} home with you", catalog.site().name),
        ))
        main.shop {
            @for product in catalog.products() {
                (product_card(product))
            }
        }
        (footer(catalog))
    };
    layout(catalog, "Shop", body)
}

pub fn not_found_page(catalog: &Catalog, path: &str) -> Markup {
    let body = html! {
        (navigation(catalog, None, NavStyle::Elevated))
        main.not-found {
            h1 { "Page not found" }
            p { "Nothing lives at " code { (path) } "." }
            a.button href=(Route::Home.path()) { "Back to the home page" }
        }
        (footer(catalog))
    };
    layout(catalog, "Not Found", body)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn test_menu_page_lists_filtered_items() {
        let catalog = catalog();
        let mut view = MenuView::new(catalog.clone());
        view.set_search("belgian");
        let page = menu_page(&catalog, &view, NavStyle::Overlay).into_string();
        assert_eq!(page.matches(r#"<article class="menu-item">"#).count(), 1);
        assert!(page.contains("Classic Belgian"));
        assert!(page.contains("$12.95"));
        assert!(page.contains("Substitute 7-Grain Waffles when available"));
        assert!(!page.contains(NO_ITEMS_MESSAGE));
    }

    #[test]
    fn test_menu_page_empty_state() {
        let catalog = catalog();
        let mut view = MenuView::new(catalog.clone());
        view.set_search("sushi");
        let page = menu_page(&catalog, &view, NavStyle::Overlay).into_string();
        assert!(page.contains(NO_ITEMS_MESSAGE));
        assert!(!page.contains(r#"class="menu-item""#));
    }

    #[test]
    fn test_menu_controls_keep_search_and_tab() {
        let catalog = catalog();
        let mut view = MenuView::new(catalog.clone());
        view.select_category("lunch").unwrap();
        view.set_search("bacon");
        let controls = menu_controls(&view).into_string();
        assert!(controls.contains(r#"name="q" value="bacon""#));
        assert!(controls.contains(r#"class="search" type="submit" name="category" value="lunch""#));
        assert_eq!(controls.matches("tab tab-active").count(), 1);
        for key in ["waffles", "specials", "lunch", "kids"] {
            assert!(controls.contains(&format!(r#"value="{key}""#)));
        }
    }

    #[test]
    fn test_search_text_is_escaped() {
        let catalog = catalog();
        let mut view = MenuView::new(catalog.clone());
        view.set_search(r#""><script>"#);
        let page = menu_page(&catalog, &view, NavStyle::Overlay).into_string();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_shop_has_add_to_cart_per_product() {
        let catalog = catalog();
        let page = shop_page(&catalog, NavStyle::Overlay).into_string();
        assert_eq!(page.matches("Add to Cart").count(), catalog.products().len());
        assert!(page.contains("$25.00"));
    }

    #[test]
    fn test_history_and_contact_pages() {
        let catalog = catalog();
        let page = history_page(&catalog, NavStyle::Overlay).into_string();
        for heading in ["Our Story", "A Family Tradition", "Looking Forward"] {
            assert!(page.contains(heading));
        }

        let page = contact_page(&catalog, NavStyle::Overlay).into_string();
        assert!(page.contains("Large Parties"));
        assert!(page.contains("mailto:info@belgianwaffle.com"));
    }

    #[test]
    fn test_not_found_page() {
        let catalog = catalog();
        let page = not_found_page(&catalog, "/cart").into_string();
        assert!(page.contains("<code>/cart</code>"));
    }
}
