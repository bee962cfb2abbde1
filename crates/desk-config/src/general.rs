//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output formats the CLI knows how to render.
pub const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "json".to_string()
}

const fn default_show_related() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Whether results include the related-records section.
    #[serde(default = "default_show_related")]
    pub show_related: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            show_related: default_show_related(),
        }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `default_format` is not one of
    /// [`OUTPUT_FORMATS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let format = self.default_format.trim().to_ascii_lowercase();
        if OUTPUT_FORMATS.contains(&format.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "general.default_format".to_string(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
            })
        }
    }
}
