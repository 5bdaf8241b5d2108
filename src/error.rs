//! Runtime errors for generated adapters.

use thiserror::Error;

/// Failure of the generated `FromStr` path.
///
/// Wraps the value type's own parse error with the name of the wrapper being
/// parsed, so binding layers report which strong type rejected the input.
#[derive(Debug, Error)]
#[error("failed to parse {type_name}: {source}")]
pub struct ParseStrongTypeError {
    type_name: &'static str,
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ParseStrongTypeError {
    pub fn new(
        type_name: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            type_name,
            source: source.into(),
        }
    }

    /// Name of the wrapper type that failed to parse.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_type_name_and_source() {
        let inner = "nope".parse::<u64>().unwrap_err();
        let err = ParseStrongTypeError::new("OrderId", inner);
        assert_eq!(err.type_name(), "OrderId");
        assert!(err.to_string().starts_with("failed to parse OrderId"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
