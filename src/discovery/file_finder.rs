use crate::config::Config;
use ignore::WalkBuilder;
use miette::{miette, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Finds manifest files below a root
pub struct ManifestFinder<'a> {
    config: &'a Config,
}

impl<'a> ManifestFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find manifest files; a file root is returned as is
    pub fn find(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        if !root.is_dir() {
            return Err(miette!("Path does not exist: {}", root.display()));
        }

        debug!("Scanning for manifests in: {}", root.display());

        let walker = WalkBuilder::new(root)
            .hidden(true)           // Skip hidden files
            .git_ignore(true)       // Respect .gitignore
            .git_exclude(true)      // Respect .git/info/exclude
            .ignore(true)           // Respect .ignore files
            .parents(false)
            .follow_links(false)
            .build();

        let mut manifests: Vec<PathBuf> = walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let path = entry.path();
                let file_name = path.file_name()?.to_str()?;

                if !self.config.is_manifest_name(file_name) {
                    return None;
                }

                if self.config.should_exclude(path) {
                    trace!("Excluding: {}", path.display());
                    return None;
                }

                trace!("Found manifest: {}", path.display());
                Some(path.to_path_buf())
            })
            .collect();

        manifests.sort();
        debug!("Found {} manifests", manifests.len());
        Ok(manifests)
    }
}
