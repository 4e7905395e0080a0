use crate::data::post_repository::PostRepository;
use crate::domain::post::NewPostForm;
use crate::domain::{DomainError, Post};
use std::sync::Arc;

pub struct BlogService {
    post_repo: Arc<dyn PostRepository + Send + Sync>,
}

impl BlogService {
    pub fn new(post_repo: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { post_repo }
    }

    pub async fn create_post(&self, form: NewPostForm) -> Result<Post, DomainError> {
        let (title, content) = form.into_parts().map_err(|field| {
            tracing::warn!("Rejected post without '{}' field", field);
            DomainError::ValidationError(format!("Missing form field: {}", field))
        })?;

        let post = self.post_repo.create(title, content).await?;

        tracing::info!("Post created: {}", post);

        Ok(post)
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.post_repo.find_by_id(id).await
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.post_repo.list_all().await?;
        tracing::debug!("Loaded {} posts", posts.len());
        Ok(posts)
    }
}
