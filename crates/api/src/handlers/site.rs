//! Public, non-API pages: the portfolio itself, robots.txt and the sitemap.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use chrono::{Datelike, Utc};
use folio_db::models::project::ProjectWithImages;
use folio_db::repositories::{
    ContactLinkRepo, EducationRepo, ExperienceRepo, ProjectImageRepo, ProjectRepo, SiteConfigRepo,
};

use crate::config::SiteSettings;
use crate::error::AppResult;
use crate::state::AppState;
use crate::views::{HomeData, HomeTemplate};

/// GET /
///
/// One query per table, every list in `display_order`.
pub async fn home(State(state): State<AppState>) -> AppResult<HomeTemplate> {
    let pool = &state.pool;
    let data = HomeData {
        config: SiteConfigRepo::get(pool).await?,
        projects: ProjectWithImages::attach(
            ProjectRepo::list(pool).await?,
            ProjectImageRepo::list_all(pool).await?,
        ),
        education: EducationRepo::list(pool).await?,
        experience: ExperienceRepo::list(pool).await?,
        links: ContactLinkRepo::list(pool).await?,
    };
    Ok(HomeTemplate::build(data, &state.config.site, Utc::now().year()))
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.config.site),
    )
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    (
        [(CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap_xml(&state.config.site, &today.format("%Y-%m-%d").to_string()),
    )
}

fn robots_txt(site: &SiteSettings) -> String {
    format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /admin/\n\
         Disallow: /api/\n\
         \n\
         Sitemap: {}/sitemap.xml\n",
        site.base_url
    )
}

fn sitemap_xml(site: &SiteSettings, lastmod: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{}/</loc>
    <lastmod>{lastmod}</lastmod>
    <changefreq>weekly</changefreq>
    <priority>1.0</priority>
  </url>
</urlset>
"#,
        site.base_url
    )
}
