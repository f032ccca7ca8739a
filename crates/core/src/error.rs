#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No measurement category contains both symbols, so there is no
    /// conversion path between them. The only domain failure an end
    /// user can act on (pick different units).
    #[error("Units are not compatible: cannot convert '{from}' to '{to}'")]
    IncompatibleUnits { from: String, to: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
