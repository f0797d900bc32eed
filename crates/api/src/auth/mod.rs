//! Authentication primitives for the owner account.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation, validation, and refresh-token helpers.

pub mod jwt;
pub mod password;
