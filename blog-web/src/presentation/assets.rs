use actix_web::{http::header, web, HttpResponse, Responder};
use anyhow::{Context, Result};
use include_dir::{include_dir, Dir, File};

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

pub const CSS_PATH: &str = "/static/dist/main.css";
pub const JS_PATH: &str = "/static/dist/main.js";

/// `main.css` and every `src/*.js` concatenated in path order, built once at startup.
pub struct AssetBundle {
    css: web::Bytes,
    js: web::Bytes,
}

impl AssetBundle {
    pub fn build() -> Result<Self> {
        Self::from_dir(&STATIC_DIR)
    }

    fn from_dir(dir: &Dir<'_>) -> Result<Self> {
        let css = dir
            .get_file("src/main.css")
            .context("static/src/main.css is missing")
            .and_then(utf8)?
            .to_owned();

        let mut scripts: Vec<&File<'_>> = dir
            .find("src/*.js")
            .context("invalid script glob")?
            .filter_map(|entry| entry.as_file())
            .collect();
        scripts.sort_by(|a, b| a.path().cmp(b.path()));

        let mut js = String::new();
        for script in &scripts {
            let source = utf8(script)?;
            js.push_str(source);
            if !source.ends_with('\n') {
                js.push('\n');
            }
        }

        tracing::debug!(
            "Bundled {} bytes of CSS and {} scripts ({} bytes)",
            css.len(),
            scripts.len(),
            js.len()
        );

        Ok(Self {
            css: web::Bytes::from(css),
            js: web::Bytes::from(js),
        })
    }

    pub fn css(&self) -> &[u8] {
        &self.css
    }

    pub fn js(&self) -> &[u8] {
        &self.js
    }
}

fn utf8<'a>(file: &'a File<'a>) -> Result<&'a str> {
    file.contents_utf8()
        .with_context(|| format!("{} is not valid UTF-8", file.path().display()))
}

fn asset_response(content_type: &'static str, body: web::Bytes) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(body)
}

pub async fn stylesheet(assets: web::Data<AssetBundle>) -> impl Responder {
    asset_response("text/css; charset=utf-8", assets.css.clone())
}

pub async fn script(assets: web::Data<AssetBundle>) -> impl Responder {
    asset_response("text/javascript; charset=utf-8", assets.js.clone())
}
