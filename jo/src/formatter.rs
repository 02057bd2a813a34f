use colored::*;
use jo_core::{JoError, TransportError};

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<serde_json::Value> for FormattedString {
    fn from(value: serde_json::Value) -> Self {
        FormattedString(serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()))
    }
}

impl From<JoError> for FormattedString {
    fn from(err: JoError) -> Self {
        let title = match &err {
            JoError::Fault { status_text, .. } => format!("Fault ({status_text}):"),
            JoError::Transport(_) => "Connection Error:".to_string(),
            JoError::Encode(_) => "Invalid Call:".to_string(),
            JoError::Decode(_) => "Invalid Response:".to_string(),
        };

        FormattedString(format!("{}\n\n'{}'", title.red().bold(), err.normalize()))
    }
}

impl From<TransportError> for FormattedString {
    fn from(err: TransportError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Setup Error:".red().bold(), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fault_shows_serialized_payload() {
        colored::control::set_override(false);

        let err = JoError::Fault {
            status_text: "Internal Server Error".to_string(),
            fault: json!({ "msg": "bad" }),
        };

        assert_eq!(
            FormattedString::from(err).0,
            "Fault (Internal Server Error):\n\n'{\"msg\":\"bad\"}'"
        );
    }
}
