use std::sync::Arc;

use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use waffle_works::catalog::Catalog;
use waffle_works::nav::Route;
use waffle_works::render;
use waffle_works::view::PageView;
use waffle_works::viewport::Viewport;

pub(super) struct PageState {
    catalog: Arc<Catalog>,
}

impl PageState {
    pub(super) fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[derive(serde::Deserialize)]
pub(super) struct MenuParams {
    category: Option<String>,
    #[serde(default)]
    q: String,
}

fn html(status: actix_web::http::StatusCode, markup: maud::Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

/// Resolve the request path to a page, mount it for the duration of the
/// render and unmount it before responding.
pub(super) async fn dispatch(req: HttpRequest, data: web::Data<PageState>) -> HttpResponse {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return HttpResponse::MethodNotAllowed().finish();
    }

    let Some(route) = Route::from_path(req.path()) else {
        tracing::debug!(path = req.path(), "no page for path");
        return html(
            actix_web::http::StatusCode::NOT_FOUND,
            render::not_found_page(&data.catalog, req.path()),
        );
    };

    let viewport = Viewport::new();
    let mut view = PageView::mount(route, data.catalog.clone(), &viewport);

    if let Some(menu) = view.menu_mut() {
        let params = web::Query::<MenuParams>::from_query(req.query_string())
            .map(web::Query::into_inner)
            .unwrap_or(MenuParams {
                category: None,
                q: String::new(),
            });
        if let Some(key) = params.category.as_deref() {
            if let Err(err) = menu.select_category(key) {
                tracing::warn!("falling back to the first tab: {err}");
            }
        }
        menu.set_search(params.q);
    }

    let markup = view.render();
    view.unmount();
    html(actix_web::http::StatusCode::OK, markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    async fn get(uri: &str) -> (StatusCode, String) {
        let state = web::Data::new(PageState::new(Arc::new(Catalog::builtin().unwrap())));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .default_service(web::route().to(dispatch)),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_every_route_renders() {
        for route in Route::ALL {
            let (status, body) = get(route.path()).await;
            assert_eq!(status, StatusCode::OK, "{route:?}");
            assert!(body.starts_with("<!DOCTYPE html>"));
            assert!(body.contains(&format!(r#"class="active" href="{}""#, route.path())));
        }
    }

    #[actix_web::test]
    async fn test_menu_query() {
        let (_, body) = get("/menu?category=waffles&q=belgian").await;
        assert_eq!(body.matches(r#"<article class="menu-item">"#).count(), 1);
        assert!(body.contains("Classic Belgian"));

        let (_, body) = get("/menu?category=lunch&q=bacon").await;
        assert_eq!(body.matches(r#"<article class="menu-item">"#).count(), 3);
        assert!(body.contains(r#"value="bacon""#));

        let (_, body) = get("/menu?q=nothing%20like%20this").await;
        assert!(body.contains("No items found"));
    }

    #[actix_web::test]
    async fn test_unknown_category_falls_back() {
        let (status, body) = get("/menu?category=pastries").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2>Waffles</h2>"));
        assert_eq!(body.matches(r#"<article class="menu-item">"#).count(), 9);
    }

    #[actix_web::test]
    async fn test_unknown_path() {
        let (status, body) = get("/cart").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[actix_web::test]
    async fn test_rejects_post() {
        let state = web::Data::new(PageState::new(Arc::new(Catalog::builtin().unwrap())));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .default_service(web::route().to(dispatch)),
        )
        .await;
        let req = test::TestRequest::post().uri("/shop").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
