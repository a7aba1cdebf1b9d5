/// Errors raised by a [`Store`](crate::Store) backend.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[display("storage I/O failed: {_0}")]
    Io(std::io::Error),
    /// The key cannot be used as a storage name.
    #[display("invalid storage key: {key:?}")]
    #[from(ignore)]
    InvalidKey {
        /// The rejected key.
        #[error(not(source))]
        key: String,
    },
}

/// Errors raised while persisting a ledger document.
///
/// The in-memory ledger is already updated when one of these is returned;
/// only the write-back failed.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LedgerError {
    /// The store rejected the write.
    #[display("failed to persist ledger: {_0}")]
    Store(StoreError),
    /// The document could not be encoded.
    #[display("failed to encode ledger: {_0}")]
    Encode(serde_json::Error),
}
