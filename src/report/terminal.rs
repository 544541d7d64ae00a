use super::ParsedManifest;
use crate::manifest::{ensure_translation_for_default_locale, Manifest, ShippingMethod};
use colored::Colorize;
use miette::Result;

/// Terminal reporter with colored output
pub struct TerminalReporter {
    default_locale: String,
}

impl TerminalReporter {
    pub fn new(default_locale: &str) -> Self {
        Self {
            default_locale: default_locale.to_string(),
        }
    }

    pub fn report(&self, manifests: &[ParsedManifest]) -> Result<()> {
        if manifests.is_empty() {
            println!("{}", "No manifests found.".yellow());
            return Ok(());
        }

        println!();
        for parsed in manifests {
            println!("{}", parsed.path.display().to_string().cyan().bold());

            match &parsed.result {
                Ok(manifest) => self.print_manifest(manifest),
                Err(err) => println!("  {} {}", "error".red().bold(), err),
            }

            println!();
        }

        self.print_summary(manifests);
        Ok(())
    }

    fn print_manifest(&self, manifest: &Manifest) {
        if manifest.is_empty() {
            println!("  {}", "no allowed hosts or shipping methods".dimmed());
            return;
        }

        if let Some(allowed_hosts) = &manifest.allowed_hosts {
            println!(
                "  {} {}",
                "allowed hosts:".dimmed(),
                allowed_hosts.hosts().join(", ")
            );
        }

        for method in &manifest.shipping_methods {
            self.print_shipping_method(method);
        }
    }

    fn print_shipping_method(&self, method: &ShippingMethod) {
        let name = ensure_translation_for_default_locale(method.name(), &self.default_locale)
            .get(&self.default_locale)
            .cloned()
            .unwrap_or_default();

        let delivery_time = method.delivery_time();

        println!(
            "  {} {} '{}' {}",
            "→".dimmed(),
            method.identifier().green(),
            name.white(),
            format!("#{}", method.position()).dimmed()
        );
        println!(
            "    {} {}-{} {}",
            "delivery:".dimmed(),
            delivery_time.min(),
            delivery_time.max(),
            delivery_time.unit()
        );
    }

    fn print_summary(&self, manifests: &[ParsedManifest]) {
        let failed = manifests.iter().filter(|m| !m.is_ok()).count();
        let parsed = manifests.len() - failed;

        println!("{}", "─".repeat(60).dimmed());

        let mut parts = vec![format!("{} parsed", parsed).green().to_string()];
        if failed > 0 {
            parts.push(format!("{} failed", failed).red().to_string());
        }
        println!("Summary: {}", parts.join(", "));
    }
}
