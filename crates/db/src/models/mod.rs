//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Nullable columns in update DTOs are `Option<Option<T>>` deserialized with
//! [`folio_core::normalize::nullable`], so `null` clears the column while an
//! absent field leaves it untouched.

pub mod contact_link;
pub mod contact_message;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod project;
pub mod session;
pub mod site_config;
pub mod user;
