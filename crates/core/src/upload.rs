//! Upload policy: which folders exist, what each accepts, and how stored
//! objects are named.
//!
//! Every check here runs before the API touches the object store, so a
//! rejected upload never costs a network round trip.

use rand::distr::{Alphanumeric, SampleString};

use crate::error::CoreError;

/// Length of the random component in generated object keys.
const RANDOM_SUFFIX_LEN: usize = 7;

/// Destination folder of an uploaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFolder {
    /// Education certificates (PDF only).
    Certificates,
    /// The downloadable CV (PDF only).
    Cv,
    /// Profile picture shown in the about section.
    Avatar,
    /// Hero background; images or short videos.
    Hero,
    /// Project screenshots.
    Projects,
}

/// Folder used when the upload form does not name one.
pub const DEFAULT_FOLDER: UploadFolder = UploadFolder::Certificates;

const ALL_FOLDERS: &[UploadFolder] = &[
    UploadFolder::Certificates,
    UploadFolder::Cv,
    UploadFolder::Avatar,
    UploadFolder::Hero,
    UploadFolder::Projects,
];

impl UploadFolder {
    /// Parse the `folder` form field.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        ALL_FOLDERS
            .iter()
            .copied()
            .find(|f| f.name() == name)
            .ok_or_else(|| {
                let known: Vec<&str> = ALL_FOLDERS.iter().map(|f| f.name()).collect();
                CoreError::Validation(format!(
                    "Unknown upload folder '{name}'. Must be one of: {known:?}"
                ))
            })
    }

    /// Folder name as used in object keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::Certificates => "certificates",
            Self::Cv => "cv",
            Self::Avatar => "avatar",
            Self::Hero => "hero",
            Self::Projects => "projects",
        }
    }

    /// Whether a file with the given `Content-Type` may be stored here.
    ///
    /// Parameters such as `; charset=...` are ignored and the comparison is
    /// case-insensitive.
    pub fn accepts(self, content_type: &str) -> bool {
        let essence = essence(content_type);
        match self {
            Self::Certificates | Self::Cv => essence == "application/pdf",
            Self::Avatar | Self::Projects => essence.starts_with("image/"),
            Self::Hero => essence.starts_with("image/") || essence.starts_with("video/"),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Self::Certificates | Self::Cv => "PDF files",
            Self::Avatar | Self::Projects => "images",
            Self::Hero => "images or videos",
        }
    }
}

/// Check an upload against the folder policy.
pub fn validate_upload(
    folder: UploadFolder,
    content_type: &str,
    size_bytes: usize,
) -> Result<(), CoreError> {
    if size_bytes == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if !folder.accepts(content_type) {
        return Err(CoreError::Validation(format!(
            "Only {} are allowed in '{}' (got '{content_type}')",
            folder.expected(),
            folder.name()
        )));
    }
    Ok(())
}

/// Longest extension kept in an object key.
const MAX_EXTENSION_LEN: usize = 10;

/// Lower-cased extension of a client filename (text after the last `.`).
///
/// Only 1 to 10 ASCII alphanumerics are accepted; anything else yields no
/// extension, so the key stays a single URL-safe path segment.
pub fn file_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let valid = (1..=MAX_EXTENSION_LEN).contains(&ext.len())
        && ext.bytes().all(|b| b.is_ascii_alphanumeric());
    valid.then(|| ext.to_ascii_lowercase())
}

/// Generate a fresh object key: `{folder}/{unix_millis}-{random}.{ext}`.
pub fn object_key(folder: UploadFolder, filename: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = Alphanumeric
        .sample_string(&mut rand::rng(), RANDOM_SUFFIX_LEN)
        .to_ascii_lowercase();
    build_key(folder, filename, millis, &suffix)
}

fn build_key(folder: UploadFolder, filename: &str, millis: i64, suffix: &str) -> String {
    match file_extension(filename) {
        Some(ext) => format!("{}/{millis}-{suffix}.{ext}", folder.name()),
        None => format!("{}/{millis}-{suffix}", folder.name()),
    }
}

fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
