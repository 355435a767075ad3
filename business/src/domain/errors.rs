/// Failures of the key-value storage holding the cart record.
/// Messages are code-style identifiers.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage.read_failed")]
    Read,
    #[error("storage.write_failed")]
    Write,
    #[error("storage.remove_failed")]
    Remove,
}
