//! Error type for asset info resolution.

/// Errors that can occur while resolving asset infos.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The runtime asset type query failed.
    #[error("asset type query failed: {0}")]
    Catalog(String),
}

/// Result alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
