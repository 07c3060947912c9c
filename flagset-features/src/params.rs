//! Parameter parsing shared by the flag variants and the admin handler

use crate::error::ParamError;

/// Name of the on/off parameter
pub const ENABLED: &str = "enabled";

/// Name of the activation ratio parameter
pub const RATIO: &str = "ratio";

/// Whether a raw value counts as absent
pub fn is_blank(raw: Option<&str>) -> bool {
    raw.is_none_or(|value| value.trim().is_empty())
}

/// Parse the textual boolean forms `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
///
/// The value is not trimmed.
pub fn parse_bool(raw: &str) -> Result<bool, ParamError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParamError::InvalidBool(raw.to_string())),
    }
}

pub fn parse_ratio(raw: &str) -> Result<f64, ParamError> {
    raw.parse::<f64>()
        .map_err(|_| ParamError::InvalidRatio(raw.to_string()))
}

/// `enabled` for flags that must be told explicitly: blank or missing is
/// an error.
pub fn require_enabled(raw: Option<&str>) -> Result<bool, ParamError> {
    match raw {
        Some(value) if !is_blank(Some(value)) => parse_bool(value),
        _ => Err(ParamError::Missing(ENABLED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_canonical_forms() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(raw), Ok(true), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(raw), Ok(false), "{raw}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_everything_else() {
        for raw in ["tru", "fal", "whatever", "yes", "tRUE", " true", ""] {
            assert_eq!(parse_bool(raw), Err(ParamError::InvalidBool(raw.to_string())));
        }
    }

    #[test]
    fn test_parse_ratio() {
        assert_eq!(parse_ratio("0.25"), Ok(0.25));
        assert_eq!(parse_ratio("1e-1"), Ok(0.1));
        assert_eq!(parse_ratio("1.5"), Ok(1.5));
        assert!(parse_ratio("half").is_err());
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  \t")));
        assert!(!is_blank(Some("x")));
    }

    #[test]
    fn test_require_enabled() {
        assert_eq!(require_enabled(Some("true")), Ok(true));
        assert_eq!(require_enabled(None), Err(ParamError::Missing(ENABLED)));
        assert_eq!(require_enabled(Some(" ")), Err(ParamError::Missing(ENABLED)));
        assert!(matches!(require_enabled(Some("tru")), Err(ParamError::InvalidBool(_))));
    }
}
