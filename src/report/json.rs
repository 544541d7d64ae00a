use super::ParsedManifest;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
    default_locale: String,
    pretty: bool,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>, default_locale: &str) -> Self {
        Self {
            output_path,
            default_locale: default_locale.to_string(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn render(&self, manifests: &[ParsedManifest]) -> Result<String> {
        let report = JsonReport::from_manifests(manifests, &self.default_locale);
        if self.pretty {
            serde_json::to_string_pretty(&report).into_diagnostic()
        } else {
            serde_json::to_string(&report).into_diagnostic()
        }
    }

    pub fn report(&self, manifests: &[ParsedManifest]) -> Result<()> {
        let json = self.render(manifests)?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport {
    version: &'static str,
    default_locale: String,
    manifests: Vec<JsonManifest>,
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonManifest {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

#[derive(Serialize)]
struct JsonSummary {
    parsed: usize,
    failed: usize,
}

impl JsonReport {
    fn from_manifests(manifests: &[ParsedManifest], default_locale: &str) -> Self {
        let entries: Vec<JsonManifest> = manifests
            .iter()
            .map(|parsed| match &parsed.result {
                Ok(manifest) => JsonManifest {
                    path: parsed.path.display().to_string(),
                    data: Some(Value::Object(manifest.to_array(default_locale))),
                    error: None,
                },
                Err(err) => JsonManifest {
                    path: parsed.path.display().to_string(),
                    data: None,
                    error: Some(JsonError {
                        message: err.to_string(),
                        element: err.element(),
                        field: err.field(),
                    }),
                },
            })
            .collect();

        let failed = entries.iter().filter(|e| e.error.is_some()).count();

        Self {
            version: env!("CARGO_PKG_VERSION"),
            default_locale: default_locale.to_string(),
            summary: JsonSummary {
                parsed: entries.len() - failed,
                failed,
            },
            manifests: entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Manifest, ManifestError};

    #[test]
    fn test_render_reports_data_and_errors() {
        let manifests = vec![
            ParsedManifest {
                path: PathBuf::from("apps/A/manifest.xml"),
                result: Manifest::parse(
                    "<manifest><allowed-hosts><host>a.example</host></allowed-hosts></manifest>",
                ),
            },
            ParsedManifest {
                path: PathBuf::from("apps/B/manifest.xml"),
                result: Err(ManifestError::MissingRequiredField {
                    element: "delivery-time",
                    field: "unit",
                }),
            },
        ];

        let json = JsonReporter::new(None, "en-GB").render(&manifests).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["defaultLocale"], "en-GB");
        assert_eq!(value["summary"]["parsed"], 1);
        assert_eq!(value["summary"]["failed"], 1);
        assert_eq!(value["manifests"][0]["data"]["allowedHosts"][0], "a.example");
        assert_eq!(value["manifests"][1]["error"]["field"], "unit");
        assert_eq!(value["manifests"][1]["error"]["element"], "delivery-time");
        assert!(value["manifests"][1].get("data").is_none());
    }

    #[test]
    fn test_compact_output() {
        let json = JsonReporter::new(None, "en-GB")
            .with_pretty(false)
            .render(&[])
            .unwrap();
        assert!(!json.contains('\n'));
    }
}
