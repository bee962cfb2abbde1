//! # desk-core
//!
//! Core types shared by every desk crate.
//!
//! This crate provides:
//! - Record structs for the three searchable resources (organizations, users, tickets)
//! - Resource, connector and field-kind enums
//! - The fixed-format timestamp codec used by the source data
//! - The query error taxonomy
//!
//! It carries no storage or query logic; those live in `desk-db`.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod timestamp;
