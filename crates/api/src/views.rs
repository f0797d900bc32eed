//! Askama templates and the view models behind them.
//!
//! View models carry plain strings; an empty string means "not set" so the
//! templates only ever test `is_empty()`.

use askama::Template;
use askama_web::WebTemplate;
use folio_core::display::{date_range_label, icon_slug, is_video_url, order_images, paragraphs};
use folio_db::models::contact_link::ContactLink;
use folio_db::models::education::Education;
use folio_db::models::experience::Experience;
use folio_db::models::project::ProjectWithImages;
use folio_db::models::site_config::SiteConfig;

use crate::config::SiteSettings;

/// The public portfolio page.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub base_url: String,
    pub hero: HeroView,
    pub about: AboutView,
    pub projects: Vec<ProjectCard>,
    pub education: Vec<TimelineEntry>,
    pub experience: Vec<TimelineEntry>,
    pub links: Vec<LinkView>,
    pub year: i32,
}

pub struct HeroView {
    pub role: String,
    pub headline: String,
    pub cv_url: String,
    pub background_url: String,
    pub background_is_video: bool,
}

pub struct AboutView {
    pub paragraphs: Vec<String>,
    pub avatar_url: String,
}

pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub repo_url: String,
    pub live_url: String,
    /// First image after main-first ordering; empty when there are none.
    pub thumbnail: String,
    /// Remaining images, in display order.
    pub gallery: Vec<String>,
}

/// One row of the education or experience timeline.
pub struct TimelineEntry {
    pub title: String,
    pub subtitle: String,
    pub period: String,
    pub paragraphs: Vec<String>,
    /// Certificate link (education only).
    pub link_url: String,
}

pub struct LinkView {
    pub platform: String,
    pub url: String,
    pub icon: &'static str,
}

/// Rows the home page is rendered from, each already in display order.
pub struct HomeData {
    pub config: SiteConfig,
    pub projects: Vec<ProjectWithImages>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub links: Vec<ContactLink>,
}

impl HomeTemplate {
    pub fn build(data: HomeData, site: &SiteSettings, year: i32) -> Self {
        let config = data.config;
        let background_url = config.hero_bg_url.unwrap_or_default();
        Self {
            title: site.title.clone(),
            base_url: site.base_url.clone(),
            hero: HeroView {
                role: config.role,
                headline: config.headline,
                cv_url: config.cv_url.unwrap_or_default(),
                background_is_video: is_video_url(&background_url),
                background_url,
            },
            about: AboutView {
                paragraphs: paragraphs(&config.about_me_content),
                avatar_url: config.avatar_url.unwrap_or_default(),
            },
            projects: data.projects.into_iter().map(ProjectCard::from).collect(),
            education: data.education.into_iter().map(TimelineEntry::from).collect(),
            experience: data.experience.into_iter().map(TimelineEntry::from).collect(),
            links: data.links.into_iter().map(LinkView::from).collect(),
            year,
        }
    }
}

impl From<ProjectWithImages> for ProjectCard {
    fn from(entry: ProjectWithImages) -> Self {
        let mut images = entry.images;
        order_images(&mut images, |img| img.is_main, |img| img.display_order);
        let mut urls = images.into_iter().map(|img| img.image_url);
        let thumbnail = urls.next().unwrap_or_default();

        let project = entry.project;
        Self {
            name: project.name,
            description: project.description,
            tech_stack: project.tech_stack,
            repo_url: project.repo_url.unwrap_or_default(),
            live_url: project.live_url.unwrap_or_default(),
            thumbnail,
            gallery: urls.collect(),
        }
    }
}

impl From<Education> for TimelineEntry {
    fn from(e: Education) -> Self {
        Self {
            title: e.degree_or_course,
            subtitle: e.institution,
            period: date_range_label(e.start_date, e.end_date),
            paragraphs: e.description.as_deref().map(paragraphs).unwrap_or_default(),
            link_url: e.certificate_url.unwrap_or_default(),
        }
    }
}

impl From<Experience> for TimelineEntry {
    fn from(e: Experience) -> Self {
        Self {
            title: e.position,
            subtitle: e.company,
            period: date_range_label(e.start_date, e.end_date),
            paragraphs: e.description.as_deref().map(paragraphs).unwrap_or_default(),
            link_url: String::new(),
        }
    }
}

impl From<ContactLink> for LinkView {
    fn from(link: ContactLink) -> Self {
        Self {
            icon: icon_slug(&link.icon_name),
            platform: link.platform,
            url: link.url,
        }
    }
}
