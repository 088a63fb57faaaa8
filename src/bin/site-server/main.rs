use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use waffle_works::catalog::Catalog;
use waffle_works::config::SiteConfig;

mod api;
mod pages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = SiteConfig::from_env()?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let catalog = match &config.content_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    let catalog = Arc::new(catalog);

    let api_state = web::Data::new(api::ApiState::new(catalog.clone()));
    let page_state = web::Data::new(pages::PageState::new(catalog));
    let origin = config.allowed_origin.clone();

    tracing::info!(addr = %config.bind_addr, "serving site");
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allowed_origin(&origin)
                    .allowed_methods(["GET", "HEAD"]),
            )
            .app_data(api_state.clone())
            .app_data(page_state.clone())
            .service(api::categories)
            .service(api::menu_items)
            .service(api::products)
            .service(api::testimonials)
            .default_service(web::route().to(pages::dispatch))
    })
    .bind(config.bind_addr)
    .with_context(|| format!("fail to bind {}", config.bind_addr))?
    .run()
    .await?;
    Ok(())
}
