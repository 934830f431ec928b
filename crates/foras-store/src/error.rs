use foras_types::events::Collection;
use thiserror::Error;

/// Failures crossing the persistence boundary.
///
/// Read-path failures are swallowed by the application store (the cache
/// degrades to empty and the failure is surfaced on the event channel);
/// write-path failures propagate to the caller for user-visible
/// reporting.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Durable store I/O failure, local or remote.
    #[error("store unavailable: {detail}")]
    Unavailable { detail: String },

    /// Write attempted without a signed-in identity (remote variant).
    #[error("no signed-in identity")]
    Unauthenticated,

    /// A stored record that cannot be decoded.
    #[error("corrupt {collection:?} record: {detail}")]
    Corrupt { collection: Collection, detail: String },
}

impl StoreError {
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        StoreError::Unavailable { detail: err.to_string() }
    }
}
