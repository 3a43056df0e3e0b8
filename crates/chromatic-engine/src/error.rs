use std::fmt;

/// Errors produced while building gradients or resolving presets.
///
/// All variants are precondition violations raised at the offending call;
/// none of them are transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradientError {
    /// The gradient configuration violates a construction invariant
    /// (too few colors, mismatched stops, bad radius, ...).
    InvalidSpec { message: String },
    /// No preset is registered under the requested name.
    UnknownPreset { name: String },
    /// A color literal could not be parsed.
    InvalidColor { input: String },
}

impl GradientError {
    pub(crate) fn invalid_spec(message: impl Into<String>) -> Self {
        Self::InvalidSpec {
            message: message.into(),
        }
    }

    pub(crate) fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset { name: name.into() }
    }

    pub(crate) fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
        }
    }
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpec { message } => write!(f, "invalid gradient: {message}"),
            Self::UnknownPreset { name } => write!(f, "unknown gradient preset {name:?}"),
            Self::InvalidColor { input } => {
                write!(f, "color literal must be #rrggbb or #rrggbbaa, got {input:?}")
            }
        }
    }
}

impl std::error::Error for GradientError {}

/// Result alias used throughout the engine.
pub type Result<T, E = GradientError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_preset() {
        let err = GradientError::unknown_preset("lava");
        assert_eq!(err.to_string(), "unknown gradient preset \"lava\"");
    }

    #[test]
    fn display_includes_invalid_spec_message() {
        let err = GradientError::invalid_spec("at least 2 colors required, got 1");
        assert!(err.to_string().contains("at least 2 colors"));
    }
}
