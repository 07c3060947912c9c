//! Error types for feature flags

use thiserror::Error;

/// A flag with this name is already registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicate feature {0:?}")]
pub struct DuplicateNameError(pub String);

impl DuplicateNameError {
    /// The name that collided
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A flag parameter was missing or could not be parsed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("missing {0:?} parameter")]
    Missing(&'static str),

    #[error("invalid boolean {0:?}")]
    InvalidBool(String),

    #[error("invalid ratio {0:?}")]
    InvalidRatio(String),
}

/// Errors raised by the feature flag crate
#[derive(Error, Debug)]
pub enum FeatureError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateNameError),

    #[error(transparent)]
    Param(#[from] ParamError),

    #[error("Template error: {0}")]
    Template(String),
}

impl From<handlebars::RenderError> for FeatureError {
    fn from(err: handlebars::RenderError) -> Self {
        FeatureError::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for FeatureError {
    fn from(err: handlebars::TemplateError) -> Self {
        FeatureError::Template(err.to_string())
    }
}

impl From<FeatureError> for flagset_core::Error {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::Duplicate(e) => flagset_core::Error::Validation(e.to_string()),
            FeatureError::Param(e) => flagset_core::Error::Validation(e.to_string()),
            FeatureError::Template(msg) => flagset_core::Error::Internal(msg),
        }
    }
}

/// Result type for feature flag operations
pub type FeatureResult<T> = Result<T, FeatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DuplicateNameError("scream".into()).to_string(),
            r#"duplicate feature "scream""#
        );
        assert_eq!(
            ParamError::Missing("enabled").to_string(),
            r#"missing "enabled" parameter"#
        );
        assert_eq!(
            ParamError::InvalidRatio("abc".into()).to_string(),
            r#"invalid ratio "abc""#
        );
    }

    #[test]
    fn test_http_mapping() {
        let err: flagset_core::Error = FeatureError::from(ParamError::InvalidBool("tru".into())).into();
        assert_eq!(err.status_code(), 400);

        let err: flagset_core::Error = FeatureError::Template("boom".into()).into();
        assert_eq!(err.status_code(), 500);
    }
}
