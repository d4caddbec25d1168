use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("{0}")]
    Storage(String),
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn required(field: &str) -> Self { Self::Validation(format!("{} is required", field)) }
}
