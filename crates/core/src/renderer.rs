//! Static asset lookup used by `serve_assets`.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
}

/// Source of the admin panel's static files (stylesheets, scripts, fonts).
pub trait TemplateRenderer: Send + Sync {
    /// Bytes of the asset with the given logical name (no leading slash).
    fn get_asset(&self, name: &str) -> Result<Vec<u8>, AssetError>;
}

/// Renderer backed by an in-memory table of assets.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedAssets {
    files: HashMap<String, Vec<u8>>,
}

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), content.into());
    }
}

impl TemplateRenderer for EmbeddedAssets {
    fn get_asset(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_lookup() {
        let assets = EmbeddedAssets::new().with_asset("app.js", "console.log(1)");

        assert_eq!(assets.get_asset("app.js").unwrap(), b"console.log(1)");
        assert_eq!(
            assets.get_asset("missing.png"),
            Err(AssetError::NotFound("missing.png".to_string()))
        );
    }
}
