//! Error types for iosim.
//!
//! Every variant is part of the user-facing diagnostic taxonomy: the
//! interpreter renders each kind differently (caret marker, ambiguity notice,
//! or a single `%`-prefixed line) and recovers at the line boundary.

/// Errors produced while resolving or executing a command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The token prefix-matches more than one command and none exactly.
    #[error("ambiguous command: {0}")]
    Ambiguous(String),

    /// The token matches no command valid in the active mode.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required sub-phrase or argument is missing entirely.
    #[error("incomplete command: {0}")]
    Incomplete(String),

    /// Arguments are present but have the wrong count or shape.
    #[error("invalid arguments: {0}")]
    BadArguments(String),

    /// Domain validation failed (hostname grammar, IPv4 literal, interface spec).
    #[error("{0}")]
    Validation(String),

    /// The operation is not permitted in the current state.
    #[error("{0}")]
    Semantic(String),
}

impl CliError {
    /// The offending token for errors that carry one.
    ///
    /// Used by the diagnostic renderer to position the `^` marker.
    pub fn token(&self) -> Option<&str> {
        match self {
            CliError::Ambiguous(tok) | CliError::InvalidInput(tok) => Some(tok),
            _ => None,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_display() {
        let e = CliError::Ambiguous("e".into());
        assert_eq!(format!("{e}"), "ambiguous command: e");
    }

    #[test]
    fn invalid_input_display() {
        let e = CliError::InvalidInput("xyz".into());
        assert_eq!(format!("{e}"), "invalid input: xyz");
    }

    #[test]
    fn incomplete_display() {
        let e = CliError::Incomplete("expecting 'configure terminal'".into());
        assert_eq!(format!("{e}"), "incomplete command: expecting 'configure terminal'");
    }

    #[test]
    fn bad_arguments_display() {
        let e = CliError::BadArguments("'shutdown' takes no arguments".into());
        assert_eq!(format!("{e}"), "invalid arguments: 'shutdown' takes no arguments");
    }

    #[test]
    fn validation_display_is_bare_message() {
        let e = CliError::Validation("invalid hostname format".into());
        assert_eq!(format!("{e}"), "invalid hostname format");
    }

    #[test]
    fn semantic_display_is_bare_message() {
        let e = CliError::Semantic("cannot negate hostname".into());
        assert_eq!(format!("{e}"), "cannot negate hostname");
    }

    #[test]
    fn token_only_on_resolution_errors() {
        assert_eq!(CliError::Ambiguous("sh".into()).token(), Some("sh"));
        assert_eq!(CliError::InvalidInput("foo".into()).token(), Some("foo"));
        assert_eq!(CliError::Incomplete("x".into()).token(), None);
        assert_eq!(CliError::Validation("x".into()).token(), None);
    }
}
