use crate::domain::{DomainError, Post};
use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;

/// Full page listing every post.
#[derive(Template)]
#[template(path = "home/index.html")]
pub struct IndexPage<'a> {
    pub blogs: &'a [Post],
}

/// HTML fragment, no layout wrapper. Returned from `POST /` so the page can
/// append it to the list.
#[derive(Template)]
#[template(path = "blog/blog_card.html")]
pub struct BlogCard<'a> {
    pub blog: &'a Post,
}

#[derive(Template)]
#[template(path = "blog/view_blog.html")]
pub struct BlogPage<'a> {
    pub blog: &'a Post,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub status: u16,
    pub message: &'a str,
}

pub fn render<T: Template>(status: StatusCode, view: &T) -> Result<HttpResponse, DomainError> {
    let html = view.render()?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post() -> Post {
        Post {
            id: 7,
            title: "Fish & <Chips>".into(),
            content: "line one\nline two".into(),
            date_created: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn card_is_a_fragment() {
        let post = post();
        let html = BlogCard { blog: &post }.render().unwrap();

        assert!(html.trim_start().starts_with("<article"));
        assert!(!html.contains("<html"));
        assert!(html.contains(r#"href="/blog/7""#));
        assert!(html.contains("2024-03-01 12:30"));
    }

    #[test]
    fn output_is_escaped() {
        let post = post();
        let html = BlogPage { blog: &post }.render().unwrap();

        assert!(html.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(!html.contains("<Chips>"));
    }

    #[test]
    fn index_renders_every_card_in_order() {
        let mut second = post();
        second.id = 8;
        second.title = "Second".into();
        let posts = vec![post(), second];

        let html = IndexPage { blogs: &posts }.render().unwrap();
        assert!(html.contains("<html"));
        let first_at = html.find(r#"id="blog-7""#).unwrap();
        let second_at = html.find(r#"id="blog-8""#).unwrap();
        assert!(first_at < second_at);
    }
}
