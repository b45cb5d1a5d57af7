use thiserror::Error;

/// Failures surfaced by the data-access layer.
///
/// This layer does no logging, retrying, or translation; storage-engine
/// failures pass through unchanged and the calling handler decides how to
/// present them.
#[derive(Error, Debug)]
pub enum RepoError {
    /// A required argument was unusable (unset id, delete of a missing row).
    #[error("{0}")]
    InvalidArgument(String),

    /// A single-result query matched more than one row.
    #[error("more than one record matched the filter")]
    MultipleRecords,

    /// Storage-engine failure, propagated unchanged.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
