//! Decode JSON record arrays into a populated [`Store`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use desk_core::entities::{Organization, Ticket, User};
use desk_core::enums::ResourceKind;
use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::store::Store;

/// Locations of the three record files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub organizations: PathBuf,
    pub users: PathBuf,
    pub tickets: PathBuf,
}

impl DataPaths {
    #[must_use]
    pub fn path(&self, kind: ResourceKind) -> &Path {
        match kind {
            ResourceKind::Organization => &self.organizations,
            ResourceKind::User => &self.users,
            ResourceKind::Ticket => &self.tickets,
        }
    }
}

/// Decode a JSON array of records from `reader`.
///
/// `source_name` only appears in error messages.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if reading fails and [`LoadError::Parse`] if
/// the content is not an array of `T`.
pub fn read_records<T, R>(reader: R, kind: ResourceKind, source_name: &str) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            LoadError::Io {
                kind,
                source_name: source_name.to_string(),
                message: e.to_string(),
            }
        } else {
            LoadError::Parse {
                kind,
                source_name: source_name.to_string(),
                message: e.to_string(),
            }
        }
    })
}

/// Decode all three record arrays and build a store from them.
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered, in organization, user,
/// ticket order.
pub fn load_store<O, U, T>(organizations: O, users: U, tickets: T) -> Result<Store, LoadError>
where
    O: Read,
    U: Read,
    T: Read,
{
    let organizations: Vec<Organization> =
        read_records(organizations, ResourceKind::Organization, "organizations")?;
    let users: Vec<User> = read_records(users, ResourceKind::User, "users")?;
    let tickets: Vec<Ticket> = read_records(tickets, ResourceKind::Ticket, "tickets")?;
    Ok(Store::from_records(organizations, users, tickets))
}

/// Open and decode the three record files.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if a file cannot be opened and
/// [`LoadError::Parse`] if its content does not decode.
pub fn load_store_from_paths(paths: &DataPaths) -> Result<Store, LoadError> {
    let organizations: Vec<Organization> = read_file(paths, ResourceKind::Organization)?;
    let users: Vec<User> = read_file(paths, ResourceKind::User)?;
    let tickets: Vec<Ticket> = read_file(paths, ResourceKind::Ticket)?;
    Ok(Store::from_records(organizations, users, tickets))
}

fn read_file<T: DeserializeOwned>(paths: &DataPaths, kind: ResourceKind) -> Result<Vec<T>, LoadError> {
    let path = paths.path(kind);
    let source_name = path.display().to_string();
    tracing::debug!(%kind, path = %source_name, "reading records");

    let file = File::open(path).map_err(|e| LoadError::Io {
        kind,
        source_name: source_name.clone(),
        message: e.to_string(),
    })?;
    read_records(BufReader::new(file), kind, &source_name)
}
