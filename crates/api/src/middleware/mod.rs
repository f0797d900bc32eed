//! Request extractors guarding owner-only endpoints.
//!
//! - [`auth::OwnerSession`] -- Gates CMS routes on the owner's access token.

pub mod auth;
