use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::steps::{total_duration, StepDefinition, StepStructure};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Ordered, contiguous animation steps
    #[serde(default = "default_steps")]
    pub steps: Vec<StepDefinition>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            tracker: TrackerConfig::default(),
            animation: AnimationConfig::default(),
            steps: default_steps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Tick interval in milliseconds while the page is scrolling
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Minimum change in scroll offset that counts as scrolling
    #[serde(default = "default_dead_zone")]
    pub dead_zone: f64,
    /// Stop animating for good once the end of the last step is reached
    #[serde(default)]
    pub animate_only_once: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            dead_zone: default_dead_zone(),
            animate_only_once: false,
        }
    }
}

impl TrackerConfig {
    /// Get tick interval as Duration
    pub fn tick_interval(&self) -> Duration {
        if self.tick_interval_ms == 0 {
            Duration::from_millis(default_tick_interval())
        } else {
            Duration::from_millis(self.tick_interval_ms)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Plain style properties (besides transforms and class) bindings may animate
    #[serde(default = "default_style_properties")]
    pub style_properties: Vec<String>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            style_properties: default_style_properties(),
        }
    }
}

fn default_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new("fireAppear", 0.0, 200.0),
        StepDefinition::new("smokeAppear", 200.0, 200.0),
        StepDefinition::new("rocketLaunch", 400.0, 400.0),
        StepDefinition::new("theEnd", 800.0, 100.0),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_interval() -> u64 {
    1000 / 30
}

fn default_dead_zone() -> f64 {
    1.0
}

fn default_style_properties() -> Vec<String> {
    vec!["opacity".to_string()]
}

impl AppConfig {
    /// Load configuration from the default file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Write configuration as TOML, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrollery/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrollery")
            .join("config.toml")
    }

    /// Build the step structure model from the configured steps
    pub fn step_structure(&self) -> crate::Result<StepStructure> {
        StepStructure::new(self.steps.clone())
    }

    /// Scroll offset at which the whole animation ends
    pub fn animation_end(&self) -> f64 {
        total_duration(&self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.tracker.tick_interval_ms, 33);
        assert_eq!(config.tracker.dead_zone, 1.0);
        assert!(!config.tracker.animate_only_once);
        assert_eq!(config.animation.style_properties, vec!["opacity"]);
        assert_eq!(config.steps.len(), 4);
        assert_eq!(config.animation_end(), 900.0);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.steps.len(), 4);
        assert_eq!(config.steps[2].name, "rocketLaunch");
    }

    #[test]
    fn test_steps_from_toml() {
        let config = AppConfig::from_toml(
            r#"
            [tracker]
            animate_only_once = true

            [[steps]]
            name = "intro"
            start = 0
            duration = 100

            [[steps]]
            name = "outro"
            start = 100
            duration = 50
            "#,
        )
        .unwrap();
        assert!(config.tracker.animate_only_once);
        assert_eq!(config.tracker.tick_interval_ms, 33);
        assert_eq!(config.steps.len(), 2);
        assert_eq!(config.animation_end(), 150.0);
        assert_eq!(config.step_structure().unwrap().last_step_index(), 1);
    }

    #[test]
    fn test_invalid_toml() {
        let err = AppConfig::from_toml("[tracker\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_zero_tick_interval_falls_back() {
        let tracker = TrackerConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(tracker.tick_interval(), Duration::from_millis(33));
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("scrollery-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.tracker.animate_only_once = true;
        config.animation.style_properties.push("width".to_string());
        config.steps.truncate(2);
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert!(loaded.tracker.animate_only_once);
        assert_eq!(loaded.animation.style_properties, vec!["opacity", "width"]);
        assert_eq!(loaded.steps, config.steps);
        assert_eq!(loaded.animation_end(), 400.0);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/scrollery.toml")).unwrap();
        assert_eq!(config.steps.len(), 4);
    }
}
