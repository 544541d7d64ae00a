mod terminal;
mod json;

pub use terminal::TerminalReporter;
pub use json::JsonReporter;

use crate::manifest::{Manifest, ManifestError};
use miette::Result;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

impl ReportFormat {
    /// Parse a format name from configuration
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "terminal" | "text" => Some(ReportFormat::Terminal),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Outcome of parsing one manifest file
#[derive(Debug)]
pub struct ParsedManifest {
    pub path: PathBuf,
    pub result: std::result::Result<Manifest, ManifestError>,
}

impl ParsedManifest {
    pub fn load(path: PathBuf) -> Self {
        let result = Manifest::from_file(&path);
        Self { path, result }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Reporter for parsed manifests
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    default_locale: String,
    pretty: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>, default_locale: impl Into<String>) -> Self {
        Self {
            format,
            output_path,
            default_locale: default_locale.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn report(&self, manifests: &[ParsedManifest]) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new(&self.default_locale);
                reporter.report(manifests)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone(), &self.default_locale)
                    .with_pretty(self.pretty);
                reporter.report(manifests)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_name() {
        assert_eq!(ReportFormat::from_name("JSON"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::from_name("terminal"), Some(ReportFormat::Terminal));
        assert_eq!(ReportFormat::from_name("sarif"), None);
    }
}
