//! Project and project image models and DTOs.

use folio_core::normalize::nullable;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `project_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectImage {
    pub id: DbId,
    pub project_id: DbId,
    pub image_url: String,
    pub is_main: bool,
    pub display_order: i32,
}

/// A project together with its images, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithImages {
    #[serde(flatten)]
    pub project: Project,
    pub images: Vec<ProjectImage>,
}

impl ProjectWithImages {
    /// Attach each image to its project. Images keep their incoming order;
    /// images whose project is not in `projects` are dropped.
    pub fn attach(projects: Vec<Project>, images: Vec<ProjectImage>) -> Vec<Self> {
        let mut out: Vec<Self> = projects
            .into_iter()
            .map(|project| Self {
                project,
                images: Vec::new(),
            })
            .collect();
        for image in images {
            if let Some(entry) = out.iter_mut().find(|p| p.project.id == image.project_id) {
                entry.images.push(image);
            }
        }
        out
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    /// Stored as an empty string when omitted.
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    /// Defaults to 0 if omitted.
    pub display_order: Option<i32>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub repo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub live_url: Option<Option<String>>,
    pub display_order: Option<i32>,
}

/// An image attached to a project create/update request.
///
/// `display_order` is not sent by the client: images are stored in the order
/// they appear in the request.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProjectImage {
    #[serde(alias = "image_url")]
    pub url: String,
    #[serde(default, alias = "isMain")]
    pub is_main: bool,
}
