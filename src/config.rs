use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::feature::entry::FeatureEntry;
use crate::feature::route::RouteVersion;
use crate::version::date_format::DateFormat;
use crate::version::error::{ConfigError, StrategyError};
use crate::version::strategy::{StrategyKind, VersionStrategy, build_strategy};

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "version_view=info";

/// Strategy configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionConfig {
    #[serde(rename = "type")]
    pub kind: StrategyKind,
    /// Date layout identifier, only read for the date strategy
    pub date_format: Option<String>,
}

impl VersionConfig {
    pub fn build_strategy(&self) -> Result<Box<dyn VersionStrategy>, StrategyError> {
        build_strategy(self.kind, self.date_format.as_deref())
    }
}

/// A feature as declared in a manifest
///
/// The component is optional here so that incomplete declarations can be
/// reported instead of failing the whole manifest.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDefinition {
    #[serde(default)]
    pub key: String,
    pub min_version: Option<String>,
    pub max_version: Option<String>,
    pub component: Option<String>,
}

impl FeatureDefinition {
    /// Convert into a registrable entry, or None if the key or component is missing
    pub fn into_entry(self) -> Option<FeatureEntry<String>> {
        let component = self.component.filter(|c| !c.is_empty());
        let Some(component) = component.filter(|_| !self.key.trim().is_empty()) else {
            warn!(
                "Invalid feature config provided: key {:?} has no component or key is empty",
                self.key
            );
            return None;
        };

        Some(FeatureEntry {
            key: self.key,
            min_version: self.min_version.filter(|v| !v.is_empty()),
            max_version: self.max_version.filter(|v| !v.is_empty()),
            implementation: component,
        })
    }
}

/// Features, routes and strategy declared together
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureManifest {
    pub strategy: VersionConfig,
    /// Version to resolve against when none is supplied by the caller
    pub version: Option<String>,
    pub features: Vec<FeatureDefinition>,
    pub routes: Vec<RouteVersion>,
}

impl FeatureManifest {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a manifest and validate its strategy configuration
    ///
    /// The date format is only checked when the date strategy is selected,
    /// matching what [`VersionConfig::build_strategy`] reads.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let manifest: Self = serde_json::from_str(content)?;
        if let (StrategyKind::Date, Some(format)) =
            (manifest.strategy.kind, &manifest.strategy.date_format)
        {
            format.parse::<DateFormat>()?;
        }
        Ok(manifest)
    }

    /// Valid feature entries; invalid definitions are reported and skipped
    pub fn entries(&self) -> Vec<FeatureEntry<String>> {
        self.features
            .iter()
            .cloned()
            .filter_map(FeatureDefinition::into_entry)
            .collect()
    }
}

/// Returns the path to the data directory for version-view.
/// Uses $XDG_DATA_HOME/version-view if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-view,
/// or ./version-view if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-view.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("version-view")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn version_config_defaults_to_semantic() {
        let result = serde_json::from_value::<VersionConfig>(json!({})).unwrap();
        assert_eq!(result, VersionConfig::default());
        assert_eq!(result.kind, StrategyKind::Semantic);
    }

    #[test]
    fn version_config_parses_date_strategy() {
        let result = serde_json::from_value::<VersionConfig>(json!({
            "type": "date",
            "dateFormat": "yyyy-MM-dd"
        }))
        .unwrap();

        assert_eq!(
            result,
            VersionConfig {
                kind: StrategyKind::Date,
                date_format: Some("yyyy-MM-dd".to_string()),
            }
        );
        assert!(result.build_strategy().is_ok());
    }

    #[test]
    fn version_config_with_unknown_format_fails_to_build() {
        let config = VersionConfig {
            kind: StrategyKind::Date,
            date_format: Some("yyyy/MM/dd".to_string()),
        };
        assert!(matches!(
            config.build_strategy(),
            Err(StrategyError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn manifest_rejects_unknown_date_format() {
        let result = FeatureManifest::from_json(
            &json!({ "strategy": { "type": "date", "dateFormat": "ddMMyyyy" } }).to_string(),
        );
        assert!(matches!(
            result,
            Err(ConfigError::Strategy(StrategyError::InvalidDateFormat { .. }))
        ));
    }

    #[test]
    fn manifest_ignores_date_format_for_semantic_strategy() {
        let manifest = FeatureManifest::from_json(
            &json!({ "strategy": { "type": "semantic", "dateFormat": "ddMMyyyy" } }).to_string(),
        )
        .unwrap();

        assert_eq!(manifest.strategy.kind, StrategyKind::Semantic);
        assert!(manifest.strategy.build_strategy().is_ok());
    }

    #[test]
    fn manifest_rejects_malformed_json() {
        let result = FeatureManifest::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn manifest_entries_skip_incomplete_definitions() {
        let manifest = FeatureManifest::from_json(
            &json!({
                "version": "2.0.0",
                "features": [
                    { "key": "header", "minVersion": "2.0.0", "component": "HeaderV2" },
                    { "key": "header", "maxVersion": "", "component": "HeaderV1" },
                    { "key": "footer" },
                    { "component": "Orphan" },
                    { "key": "", "component": "Blank" }
                ],
                "routes": [{ "version": "1.0.0" }]
            })
            .to_string(),
        )
        .unwrap();

        assert_eq!(manifest.version.as_deref(), Some("2.0.0"));
        assert_eq!(manifest.routes, vec![RouteVersion::new("1.0.0")]);
        assert_eq!(
            manifest.entries(),
            vec![
                FeatureEntry::new("header", "HeaderV2".to_string()).min_version("2.0.0"),
                FeatureEntry::new("header", "HeaderV1".to_string()),
            ]
        );
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/version-view"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/version-view"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./version-view"));
    }
}
