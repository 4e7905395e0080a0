use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date_created: DateTime<Utc>,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Post(id={}, title={:?})", self.id, self.title)
    }
}

/// Body of `POST /`. Both fields are required; absence is reported by
/// [`NewPostForm::into_parts`] rather than by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct NewPostForm {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NewPostForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Returns `(title, content)` or the name of the first missing field.
    pub fn into_parts(self) -> Result<(String, String), &'static str> {
        let title = self.title.ok_or("title")?;
        let content = self.content.ok_or("content")?;
        Ok((title, content))
    }
}
