//! Presentation helpers for the public portfolio page.

use crate::types::Date;

/// Label shown in place of a missing end date.
pub const PRESENT_LABEL: &str = "Present";

/// Icon used for contact links whose `icon_name` is not recognised.
pub const FALLBACK_ICON: &str = "mail";

/// Sort a project's images for display: the main image first, then the
/// rest by `display_order`. Ties keep their incoming order.
pub fn order_images<T>(images: &mut [T], is_main: impl Fn(&T) -> bool, order: impl Fn(&T) -> i32) {
    images.sort_by_key(|img| (!is_main(img), order(img)));
}

/// Format an education/experience date range, e.g. `Mar 2021 - Present`.
pub fn date_range_label(start: Date, end: Option<Date>) -> String {
    let end = end.map_or_else(|| PRESENT_LABEL.to_string(), month_year);
    format!("{} - {end}", month_year(start))
}

fn month_year(date: Date) -> String {
    date.format("%b %Y").to_string()
}

/// Map a contact link's free-form `icon_name` to a known icon slug.
pub fn icon_slug(icon_name: &str) -> &'static str {
    match icon_name.trim().to_ascii_lowercase().as_str() {
        "github" => "github",
        "linkedin" => "linkedin",
        "twitter" | "x" => "twitter",
        "instagram" => "instagram",
        "facebook" => "facebook",
        "youtube" => "youtube",
        "whatsapp" => "whatsapp",
        "website" | "globe" | "web" => "globe",
        "email" | "mail" => "mail",
        _ => FALLBACK_ICON,
    }
}

/// Whether a hero background URL points at a video rather than an image,
/// judged by its extension. Query strings and fragments are ignored.
pub fn is_video_url(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let Some((_, ext)) = path.rsplit_once('.') else {
        return false;
    };
    VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
}

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg"];

/// Split free text into paragraphs on blank lines, dropping empty ones.
pub fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}
