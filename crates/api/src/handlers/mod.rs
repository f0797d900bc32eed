pub mod auth;
pub mod contact;
pub mod contact_link;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod message;
pub mod project;
pub mod site;
pub mod site_config;
pub mod upload;
