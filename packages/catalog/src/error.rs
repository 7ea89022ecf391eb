use thiserror::Error;

/// Errors raised while loading the catalog dataset.
///
/// Unresolved foreign keys are not errors: the join stage maps them to `None`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}
