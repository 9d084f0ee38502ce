/// Validation failure reported by a tool before any work is attempted.
///
/// Every tool follows the same convention: a typed request goes in, and
/// either a typed response or a `ToolError` comes out. The message is meant
/// for humans; [`ToolError::code`] is stable for machines.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("{0}")]
    EmptyInput(String),

    #[error("Invalid mode. Use 'encode' or 'decode'")]
    InvalidMode(String),
}

impl ToolError {
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::EmptyInput(_) => "empty_input",
            ToolError::InvalidMode(_) => "invalid_mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message_is_verbatim() {
        let err = ToolError::EmptyInput("URL cannot be empty".to_string());
        assert_eq!(err.to_string(), "URL cannot be empty");
        assert_eq!(err.code(), "empty_input");
    }

    #[test]
    fn test_invalid_mode_message() {
        let err = ToolError::InvalidMode("rot13".to_string());
        assert_eq!(err.to_string(), "Invalid mode. Use 'encode' or 'decode'");
        assert_eq!(err.code(), "invalid_mode");
    }
}
