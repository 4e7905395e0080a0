use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Template error: {0}")]
    TemplateError(String),
}

impl DomainError {
    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::PostNotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::ValidationError(_) => 400,
            Self::DatabaseError(_) | Self::TemplateError(_) => 500,
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::PostNotFound,
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<askama::Error> for DomainError {
    fn from(err: askama::Error) -> Self {
        Self::TemplateError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(DomainError::PostNotFound.to_status_code(), 404);
        assert_eq!(DomainError::MethodNotAllowed.to_status_code(), 405);
        assert_eq!(
            DomainError::ValidationError("title".into()).to_status_code(),
            400
        );
        assert_eq!(
            DomainError::DatabaseError("down".into()).to_status_code(),
            500
        );
    }

    #[test]
    fn missing_row_is_not_found() {
        let err = DomainError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::PostNotFound));
    }
}
