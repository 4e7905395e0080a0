pub mod assets;
pub mod http_handlers;
pub mod views;

use actix_web::web;

/// Registers every route. Expects `web::Data<Arc<BlogService>>` and
/// `web::Data<AssetBundle>` to be registered on the `App`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default().error_handler(|err, _req| http_handlers::form_error(err)),
    )
    .app_data(web::PathConfig::default().error_handler(|err, _req| http_handlers::path_error(err)))
    .service(
        web::resource("/")
            .route(web::get().to(http_handlers::list_posts))
            .route(web::post().to(http_handlers::create_post))
            .default_service(web::to(|| http_handlers::method_not_allowed("GET, POST"))),
    )
    .service(
        web::resource("/blog/{id}")
            .route(web::get().to(http_handlers::get_post))
            .default_service(web::to(|| http_handlers::method_not_allowed("GET"))),
    )
    .service(web::resource(assets::CSS_PATH).route(web::get().to(assets::stylesheet)))
    .service(web::resource(assets::JS_PATH).route(web::get().to(assets::script)))
    .default_service(web::to(http_handlers::not_found));
}
