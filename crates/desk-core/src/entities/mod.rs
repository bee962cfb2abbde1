//! Record structs for the three searchable resources.
//!
//! Each struct mirrors one JSON object of the source data; serialized field
//! names are the external names users search by. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.
//!
//! Relationships are plain foreign-key ids. The derived back-references
//! (organization → users, user → tickets, ...) are owned by the store, not by
//! these records.

mod organization;
mod ticket;
mod user;

pub use organization::Organization;
pub use ticket::Ticket;
pub use user::User;
