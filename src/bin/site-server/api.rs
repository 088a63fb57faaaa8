use std::sync::Arc;

use actix_web::{web, HttpResponse};
use waffle_works::catalog::Catalog;
use waffle_works::data::MenuItem;
use waffle_works::menu::{MenuListing, MenuQueryBuilder};

pub(super) struct ApiState {
    pub(super) catalog: Arc<Catalog>,
}

impl ApiState {
    pub(super) fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[derive(serde::Serialize)]
struct ErrJsonResp {
    message: String,
}

#[derive(serde::Serialize)]
struct CategorySummary<'a> {
    key: &'a str,
    title: &'a str,
    count: usize,
}

#[derive(serde::Serialize)]
struct MenuJsonResp<'a> {
    category: &'a str,
    search: &'a str,
    items: Vec<&'a MenuItem>,
}

#[actix_web::get("/api/v1/menu")]
pub(super) async fn categories(data: web::Data<ApiState>) -> HttpResponse {
    let summary = data
        .catalog
        .categories()
        .iter()
        .map(|c| CategorySummary {
            key: &c.key,
            title: &c.title,
            count: c.items.len(),
        })
        .collect::<Vec<_>>();
    HttpResponse::Ok().json(summary)
}

#[derive(serde::Deserialize)]
pub(super) struct CategoryPath {
    category: String,
}

#[derive(serde::Deserialize)]
pub(super) struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[actix_web::get("/api/v1/menu/{category}")]
pub(super) async fn menu_items(
    data: web::Data<ApiState>,
    path: web::Path<CategoryPath>,
    query: web::Query<SearchQuery>,
) -> HttpResponse {
    let query = MenuQueryBuilder::default()
        .category(path.category.as_str())
        .search(query.q.as_str())
        .build();
    let query = match query {
        Ok(query) => query,
        Err(err) => {
            return HttpResponse::BadRequest().json(ErrJsonResp {
                message: err.to_string(),
            })
        }
    };

    match query.run(&data.catalog) {
        Ok((category, listing)) => {
            let items = match listing {
                MenuListing::Items(items) => items,
                MenuListing::Empty => Vec::new(),
            };
            HttpResponse::Ok().json(MenuJsonResp {
                category: &category.key,
                search: query.search(),
                items,
            })
        }
        Err(err) => {
            tracing::warn!("menu lookup rejected: {err}");
            HttpResponse::NotFound().json(ErrJsonResp {
                message: err.to_string(),
            })
        }
    }
}

#[actix_web::get("/api/v1/products")]
pub(super) async fn products(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(data.catalog.products())
}

#[actix_web::get("/api/v1/testimonials")]
pub(super) async fn testimonials(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(data.catalog.testimonials())
}
