use crate::application::BlogService;
use crate::domain::post::NewPostForm;
use crate::domain::DomainError;
use crate::presentation::views::{self, BlogCard, BlogPage, ErrorPage, IndexPage};
use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use std::sync::Arc;

// Преобразование DomainError в HTML-страницу ошибки
pub fn error_to_response(err: &DomainError) -> HttpResponse {
    let status = err.status_code();
    let message = match err {
        DomainError::DatabaseError(_) | DomainError::TemplateError(_) => {
            tracing::error!("Request failed: {}", err);
            "Internal server error".to_string()
        }
        _ => err.to_string(),
    };

    let page = ErrorPage {
        status: status.as_u16(),
        message: &message,
    };

    views::render(status, &page).unwrap_or_else(|render_err| {
        tracing::error!("Failed to render error page: {}", render_err);
        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(message)
    })
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.to_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        error_to_response(self)
    }
}

pub async fn list_posts(blog_service: web::Data<Arc<BlogService>>) -> impl Responder {
    tracing::info!("Listing posts");

    match blog_service.list_posts().await {
        Ok(blogs) => views::render(StatusCode::OK, &IndexPage { blogs: &blogs })
            .unwrap_or_else(|err| error_to_response(&err)),
        Err(err) => error_to_response(&err),
    }
}

pub async fn create_post(
    blog_service: web::Data<Arc<BlogService>>,
    form: web::Form<NewPostForm>,
) -> impl Responder {
    tracing::info!("Creating post");

    match blog_service.create_post(form.into_inner()).await {
        Ok(blog) => views::render(StatusCode::OK, &BlogCard { blog: &blog })
            .unwrap_or_else(|err| error_to_response(&err)),
        Err(err) => error_to_response(&err),
    }
}

pub async fn get_post(
    blog_service: web::Data<Arc<BlogService>>,
    path: web::Path<i64>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::info!("Getting post with id={}", post_id);

    match blog_service.get_post(post_id).await {
        Ok(blog) => views::render(StatusCode::OK, &BlogPage { blog: &blog })
            .unwrap_or_else(|err| error_to_response(&err)),
        Err(err) => error_to_response(&err),
    }
}

pub async fn method_not_allowed(allow: &'static str) -> HttpResponse {
    let mut response = error_to_response(&DomainError::MethodNotAllowed);
    response
        .headers_mut()
        .insert(header::ALLOW, header::HeaderValue::from_static(allow));
    response
}

// Ошибки экстракторов тоже отдаём HTML-страницей
pub fn form_error(err: actix_web::error::UrlencodedError) -> actix_web::Error {
    DomainError::ValidationError(err.to_string()).into()
}

pub fn path_error(err: actix_web::error::PathError) -> actix_web::Error {
    tracing::debug!("Unmatched post id: {}", err);
    DomainError::PostNotFound.into()
}

pub async fn not_found() -> HttpResponse {
    let page = ErrorPage {
        status: 404,
        message: "Page not found",
    };
    views::render(StatusCode::NOT_FOUND, &page).unwrap_or_else(|err| error_to_response(&err))
}
