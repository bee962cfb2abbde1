//! Record file locations.

use std::path::PathBuf;

use desk_core::enums::ResourceKind;
use desk_db::DataPaths;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_organizations_file() -> String {
    "organizations.json".to_string()
}

fn default_users_file() -> String {
    "users.json".to_string()
}

fn default_tickets_file() -> String {
    "tickets.json".to_string()
}

/// `[data]` section: where the three JSON record arrays live.
///
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataConfig {
    #[serde(default = "default_organizations_file")]
    pub organizations_file: String,

    #[serde(default = "default_users_file")]
    pub users_file: String,

    #[serde(default = "default_tickets_file")]
    pub tickets_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            organizations_file: default_organizations_file(),
            users_file: default_users_file(),
            tickets_file: default_tickets_file(),
        }
    }
}

impl DataConfig {
    /// Configured file for one resource kind.
    #[must_use]
    pub fn file(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Organization => &self.organizations_file,
            ResourceKind::User => &self.users_file,
            ResourceKind::Ticket => &self.tickets_file,
        }
    }

    /// Mutable access to the file for one resource kind, used when CLI flags
    /// override configured values.
    pub fn file_mut(&mut self, kind: ResourceKind) -> &mut String {
        match kind {
            ResourceKind::Organization => &mut self.organizations_file,
            ResourceKind::User => &mut self.users_file,
            ResourceKind::Ticket => &mut self.tickets_file,
        }
    }

    /// All three files are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        ResourceKind::ALL
            .iter()
            .all(|kind| !self.file(*kind).trim().is_empty())
    }

    /// The three files as loader paths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] naming the first empty entry.
    pub fn paths(&self) -> Result<DataPaths, ConfigError> {
        if let Some(kind) = ResourceKind::ALL
            .into_iter()
            .find(|kind| self.file(*kind).trim().is_empty())
        {
            return Err(ConfigError::NotConfigured {
                section: "data".to_string(),
                field: format!("{}s_file", kind.as_str()),
            });
        }

        Ok(DataPaths {
            organizations: PathBuf::from(self.organizations_file.trim()),
            users: PathBuf::from(self.users_file.trim()),
            tickets: PathBuf::from(self.tickets_file.trim()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_working_directory_files() {
        let config = DataConfig::default();
        assert!(config.is_configured());
        assert_eq!(
            config.paths().unwrap(),
            DataPaths {
                organizations: PathBuf::from("organizations.json"),
                users: PathBuf::from("users.json"),
                tickets: PathBuf::from("tickets.json"),
            }
        );
    }

    #[test]
    fn empty_entry_is_not_configured() {
        let config = DataConfig {
            users_file: "  ".to_string(),
            ..DataConfig::default()
        };
        assert!(!config.is_configured());
        match config.paths() {
            Err(ConfigError::NotConfigured { section, field }) => {
                assert_eq!(section, "data");
                assert_eq!(field, "users_file");
            }
            other => panic!("expected NotConfigured, got {other:?}"),
        }
    }

    #[test]
    fn file_mut_overrides_one_kind() {
        let mut config = DataConfig::default();
        *config.file_mut(ResourceKind::Ticket) = "/tmp/t.json".to_string();
        assert_eq!(config.file(ResourceKind::Ticket), "/tmp/t.json");
        assert_eq!(config.file(ResourceKind::User), "users.json");
    }
}
