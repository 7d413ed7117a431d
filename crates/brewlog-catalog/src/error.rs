use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown coffee style: {0}")]
    UnknownStyle(String),
}
