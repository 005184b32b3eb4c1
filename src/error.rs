use thiserror::Error;

/// Everything a persistence call can fail with.
///
/// The first four variants are caller contract violations; `Db` and `Io`
/// are runtime failures. "id not found" is never an error — update and
/// delete report it as `Ok(false)`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("filter and limit cannot be stated at a time")]
    FilterWithLimit,

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("the id field cannot be updated")]
    ImmutableField,

    #[error("invalid value for {field}: expected {expected}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
    },

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True for the variants that indicate a caller bug rather than a
    /// runtime condition.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            StoreError::FilterWithLimit
                | StoreError::UnknownField(_)
                | StoreError::ImmutableField
                | StoreError::InvalidValue { .. }
        )
    }
}
