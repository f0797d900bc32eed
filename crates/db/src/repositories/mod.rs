//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod contact_link_repo;
pub mod contact_message_repo;
pub mod dashboard_repo;
pub mod education_repo;
pub mod experience_repo;
pub mod project_image_repo;
pub mod project_repo;
pub mod session_repo;
pub mod site_config_repo;
pub mod user_repo;

pub use contact_link_repo::ContactLinkRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use dashboard_repo::DashboardRepo;
pub use education_repo::EducationRepo;
pub use experience_repo::ExperienceRepo;
pub use project_image_repo::ProjectImageRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use site_config_repo::SiteConfigRepo;
pub use user_repo::UserRepo;
