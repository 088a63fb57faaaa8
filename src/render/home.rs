use maud::{html, Markup};

use crate::catalog::Catalog;
use crate::data::Testimonial;
use crate::nav::{NavStyle, Route};

use super::{contact_lines, footer, layout, navigation};

pub fn home_page(catalog: &Catalog, style: NavStyle) -> Markup {
    let body = html! {
        (navigation(catalog, Some(Route::Home), style))
        (hero(catalog))
        (food_gallery(catalog))
        (history_teaser(catalog))
        (testimonials(catalog))
        (contact(catalog))
        (footer(catalog))
    };
    layout(catalog, "Home", body)
}

fn hero(catalog: &Catalog) -> Markup {
    let site = catalog.site();
    html! {
        section.hero style=(format!("background-image: url({})", site.hero_image)) {
            h1 { (site.hero_title) }
            p { (site.hero_text) }
            div.hero-actions {
                a.button href=(Route::Menu.path()) { "Breakfast Menu" }
                a.button href=(format!("{}?category=lunch", Route::Menu.path())) { "Lunch Menu" }
            }
        }
    }
}

fn food_gallery(catalog: &Catalog) -> Markup {
    html! {
        section.gallery {
            @for image in catalog.gallery() {
                img src=(image.src) alt=(image.alt);
            }
        }
    }
}

fn history_teaser(catalog: &Catalog) -> Markup {
    let history = catalog.history();
    html! {
        section.history-teaser {
            img src=(history.teaser_image) alt=(format!("{} Logo", catalog.site().name));
            div {
                h2 { "Our History" }
                @for paragraph in &history.teaser {
                    p { (paragraph) }
                }
                a.button href=(Route::History.path()) { "Read More" }
            }
        }
    }
}

fn testimonials(catalog: &Catalog) -> Markup {
    html! {
        section.testimonials {
            h2 { "From Our Customers" }
            p {
                "Established in " (catalog.site().established)
                ", we've become a prominent business in the Lake Arrowhead. Hear what visitors from around the world have to say about our wonderful meals and delicious waffles!"
            }
            div.testimonial-grid {
                @for testimonial in catalog.testimonials() {
                    (testimonial_card(testimonial))
                }
            }
        }
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Markup {
    html! {
        article.testimonial {
            @if let Some(image) = &testimonial.image {
                img.avatar src=(image) alt=(testimonial.name);
            }
            p.text { (testimonial.text) }
            div.rating aria-label=(format!("{} out of 5", testimonial.rating)) {
                @for _ in 0..testimonial.rating {
                    span.star { "★" }
                }
            }
            p.name { (testimonial.name) }
        }
    }
}

fn contact(catalog: &Catalog) -> Markup {
    let contact = catalog.contact();
    html! {
        section.contact {
            div {
                h2 { "Connect With Us" }
                p { (contact.large_party_note) }
                (contact_lines(contact))
            }
            img src=(contact.map_image) alt="Lake Arrowhead Village Map";
        }
    }
}
