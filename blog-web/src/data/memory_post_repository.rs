use crate::data::post_repository::PostRepository;
use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// Non-durable store selected with `DATABASE_URL=memory://`.
#[derive(Default)]
pub struct InMemoryPostRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    posts: Vec<Post>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, title: String, content: String) -> Result<Post, DomainError> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let post = Post {
            id: state.last_id,
            title,
            content,
            date_created: Utc::now(),
        };
        // Ids only grow, so pushing keeps `posts` sorted.
        state.posts.push(post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        let state = self.state.read().await;
        state
            .posts
            .binary_search_by_key(&id, |post| post.id)
            .map(|idx| state.posts[idx].clone())
            .map_err(|_| DomainError::PostNotFound)
    }

    async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.state.read().await.posts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create("a".into(), "b".into()).await.unwrap();
        let second = repo.create("a".into(), "b".into()).await.unwrap();

        assert_eq!(first.id, 1);
        assert!(second.id > first.id);
        assert_eq!(first.title, second.title);
        assert_eq!(first.content, second.content);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create("Title".into(), "Body".into()).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, created);

        let missing = repo.find_by_id(999_999).await;
        assert!(matches!(missing, Err(DomainError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_concurrent_creates_stay_ordered() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(format!("post {i}"), "body".into()).await.unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let posts = repo.list_all().await.unwrap();
        assert_eq!(posts.len(), 32);
        assert!(posts.windows(2).all(|w| w[0].id < w[1].id));
    }
}
