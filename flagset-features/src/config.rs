//! Admin handler configuration

use serde::{Deserialize, Serialize};

/// Settings for [`crate::FlagAdmin`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// `<title>` of the HTML index page
    pub title: String,
    /// Answer a successful update with a 307 back to the `Referer`
    pub redirect_to_referer: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            title: "Flags".to_string(),
            redirect_to_referer: true,
        }
    }
}

impl AdminConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_redirect_to_referer(mut self, enable: bool) -> Self {
        self.redirect_to_referer = enable;
        self
    }
}
