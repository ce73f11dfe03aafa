//! Extension to content-type resolution for served assets.

use std::collections::HashMap;
use std::path::Path;

/// Content type used when an extension is not in the table.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const DEFAULT_TABLE: &[(&str, &str)] = &[
    ("css", "text/css; charset=utf-8"),
    ("js", "application/javascript"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("svg", "image/svg+xml"),
    ("woff2", "font/woff2"),
    ("woff", "font/woff"),
    ("ttf", "font/ttf"),
    ("map", "application/json"),
    ("html", "text/html; charset=utf-8"),
    ("json", "application/json"),
    ("ico", "image/x-icon"),
    ("txt", "text/plain; charset=utf-8"),
];

/// Extension (lower-case, no dot) to content-type table.
///
/// `ContentTypes::default()` carries the stylesheet, script, image and font
/// types the admin panel ships; anything else resolves to
/// [`DEFAULT_CONTENT_TYPE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypes {
    table: HashMap<String, String>,
}

impl Default for ContentTypes {
    fn default() -> Self {
        DEFAULT_TABLE
            .iter()
            .fold(Self::empty(), |types, (ext, ct)| types.with(ext, ct))
    }
}

impl ContentTypes {
    /// A table with no entries; every lookup yields the default.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Add or replace the mapping for `extension`.
    pub fn with(mut self, extension: &str, content_type: &str) -> Self {
        self.table
            .insert(normalize_extension(extension), content_type.to_string());
        self
    }

    pub fn resolve(&self, extension: &str) -> &str {
        self.table
            .get(&normalize_extension(extension))
            .map(String::as_str)
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Resolve by the extension of an asset name such as `css/site.min.css`.
    pub fn for_path(&self, path: &str) -> &str {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.resolve(ext),
            None => DEFAULT_CONTENT_TYPE,
        }
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}
