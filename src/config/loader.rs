use crate::manifest::FALLBACK_LOCALE;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for appmanifest runs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale every translated field must carry in the output
    pub default_locale: String,

    /// File names treated as manifests when scanning a directory
    pub manifest_names: Vec<String>,

    /// Patterns to exclude from scanning
    pub exclude: Vec<String>,

    /// Report configuration
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: terminal, json
    pub format: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: FALLBACK_LOCALE.to_string(),
            manifest_names: vec!["manifest.xml".to_string()],
            exclude: vec![
                "**/vendor/**".to_string(),
                "**/node_modules/**".to_string(),
            ],
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
            pretty: true,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(root: &Path) -> Result<Self> {
        let default_names = [
            ".appmanifest.yml",
            ".appmanifest.yaml",
            ".appmanifest.toml",
            "appmanifest.yml",
            "appmanifest.yaml",
            "appmanifest.toml",
        ];

        for name in &default_names {
            let path = root.join(name);
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Check if a path matches an exclusion pattern
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pattern| glob_match(pattern, &path_str))
    }

    /// Check if a file name is one of the manifest names
    pub fn is_manifest_name(&self, file_name: &str) -> bool {
        self.manifest_names.iter().any(|name| name == file_name)
    }
}

/// Simple glob matching for patterns like "**/vendor/**" or "*.xml"
fn glob_match(pattern: &str, text: &str) -> bool {
    if pattern.starts_with('*') && !pattern.contains('/') {
        return text.ends_with(&pattern[1..]);
    }

    if pattern.ends_with('*') && !pattern.contains('/') {
        return text.starts_with(&pattern[..pattern.len() - 1]);
    }

    if pattern.contains("**") {
        // "**/dir/**" matches a whole path segment, not a substring
        if pattern.starts_with("**/") && pattern.ends_with("/**") {
            let dir_name = pattern
                .trim_start_matches("**/")
                .trim_end_matches("/**")
                .trim_matches('/');
            return text.contains(&format!("/{}/", dir_name));
        }

        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');

            return match (prefix.is_empty(), suffix.is_empty()) {
                (true, true) => true,
                (true, false) => text.ends_with(suffix),
                (false, true) => text.starts_with(prefix) || text.contains(&format!("/{}/", prefix)),
                (false, false) => {
                    (text.starts_with(prefix) || text.contains(&format!("/{}/", prefix)))
                        && text.ends_with(suffix)
                }
            };
        }
    }

    text == pattern
}
