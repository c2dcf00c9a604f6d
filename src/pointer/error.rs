use nom_language::error::{VerboseError, VerboseErrorKind};

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PointerError {
    #[error("Invalid pointer syntax at position {position}: {message}")]
    InvalidSyntax { position: usize, message: String },
}

impl PointerError {
    pub fn invalid_syntax(position: usize, message: impl Into<String>) -> Self {
        PointerError::InvalidSyntax {
            position,
            message: message.into(),
        }
    }
}

pub(super) fn convert_verbose_error(input: &str, err: VerboseError<&str>) -> PointerError {
    let Some((fragment, kind)) = err.errors.last() else {
        return PointerError::invalid_syntax(0, "invalid pointer syntax");
    };

    let position = input.len() - fragment.len();

    let message = match kind {
        VerboseErrorKind::Context(ctx) => ctx.to_string(),
        VerboseErrorKind::Char(c) => format!("expected '{}'", c),
        VerboseErrorKind::Nom(nom_err) => format!("parser error: {:?}", nom_err),
    };

    PointerError::InvalidSyntax { position, message }
}

pub(super) const MALFORMED_ESCAPE_MSG: &str = "malformed escape. '~' may only appear as '~0' (for '~') or '~1' (for '/'). \
                            Fix: write a literal '~' as '~0'.";

pub(super) fn trailing_input_error(input: &str, rest: &str) -> PointerError {
    let position = input.len().saturating_sub(rest.len());
    let ch = rest.chars().next();

    let message = match ch {
        Some('~') => MALFORMED_ESCAPE_MSG.to_string(),
        Some(c) => format!(
            "unexpected character '{}'. Fix: remove it or escape it in the reference token.",
            c
        ),
        None => "unexpected end of input".to_string(),
    };

    PointerError::InvalidSyntax { position, message }
}
