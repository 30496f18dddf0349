use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A page to simulate: animated elements plus a default scroll script
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Offsets the page scrolls to, one after another
    #[serde(default)]
    pub offsets: Vec<f64>,
    #[serde(default)]
    pub elements: Vec<SceneElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneElement {
    pub name: String,
    /// Classes the element carries before any animation runs
    #[serde(default)]
    pub classes: Vec<String>,
    /// Declarative animation attribute (JSON)
    pub animations: String,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid scene {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
