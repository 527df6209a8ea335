#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("corrupt row in {table}.{column}: {detail}")]
    CorruptRow {
        table: &'static str,
        column: &'static str,
        detail: String,
    },

    #[error("IO error: {0}")]
    Io(String),
}

impl StoreError {
    /// Reject an empty required text field.
    pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), Self> {
        if value.is_empty() {
            return Err(Self::Validation(format!("{field} must not be empty")));
        }
        Ok(())
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        assert_eq!(StoreError::NotFound("task").to_string(), "task not found");
    }

    #[test]
    fn require_non_empty_accepts_text() {
        assert!(StoreError::require_non_empty("name", "x").is_ok());
    }

    #[test]
    fn require_non_empty_rejects_empty() {
        let err = StoreError::require_non_empty("name", "").unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref m) if m == "name must not be empty"));
    }
}
