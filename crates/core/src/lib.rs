//! Domain primitives shared by the database and API crates.
//!
//! Nothing in here touches the network or the database: these are the
//! rules the portfolio applies to incoming data (empty-string cleanup,
//! upload policy, contact form validation) and the helpers the public page
//! uses to present records.

pub mod contact;
pub mod display;
pub mod error;
pub mod normalize;
pub mod types;
pub mod upload;
