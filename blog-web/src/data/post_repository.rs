use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, title: String, content: String) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError>;
    /// All posts, ascending by id.
    async fn list_all(&self) -> Result<Vec<Post>, DomainError>;
}

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn post_from_row(row: &PgRow) -> Result<Post, DomainError> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        date_created: row.try_get("date_created")?,
    })
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, title: String, content: String) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO posts (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content, date_created
            "#,
        )
        .bind(&title)
        .bind(&content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create post: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        post_from_row(&row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, content, date_created
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => post_from_row(&row),
            None => Err(DomainError::PostNotFound),
        }
    }

    async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, date_created
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        rows.iter().map(post_from_row).collect()
    }
}
