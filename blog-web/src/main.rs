use dotenvy::dotenv;
use std::sync::Arc;

use blog_web::application::BlogService;
use blog_web::infrastructure::{
    config::AppConfig, database::connect_post_repository, logging::init_logging,
};
use blog_web::presentation::{self, assets::AssetBundle};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    init_logging()?;

    let config = AppConfig::from_env()?;
    let http_addr = config.http_addr();

    tracing::info!("Starting blog server...");
    tracing::info!("HTTP server will listen on {}", http_addr);

    let post_repo = connect_post_repository(&config).await?;
    let blog_service = Arc::new(BlogService::new(post_repo));

    tracing::info!("Building static asset bundles...");
    let assets = actix_web::web::Data::new(AssetBundle::build()?);

    run_http_server(http_addr, blog_service, assets).await?;

    tracing::info!("Shutting down...");
    Ok(())
}

async fn run_http_server(
    addr: String,
    blog_service: Arc<BlogService>,
    assets: actix_web::web::Data<AssetBundle>,
) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, web, App, HttpServer};

    tracing::info!("Configuring HTTP server...");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(blog_service.clone()))
            .app_data(assets.clone())
            .configure(presentation::routes)
    })
    .bind(&addr)?
    .run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
