use super::allowed_hosts::AllowedHosts;
use super::element::{FieldMap, XmlElement};
use super::error::{ManifestError, Result};
use super::shipping_method::ShippingMethod;
use crate::xml::XmlElementNode;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The elements of one app manifest file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    /// File the manifest was read from, if any
    pub path: Option<PathBuf>,

    pub allowed_hosts: Option<AllowedHosts>,

    /// Shipping methods in document order
    pub shipping_methods: Vec<ShippingMethod>,
}

impl Manifest {
    /// Parse manifest XML
    ///
    /// Shipping methods are found wherever they are nested below the root,
    /// which covers both a `<shipping-methods>` group and bare elements. Any
    /// invalid element rejects the whole manifest.
    pub fn parse(xml: &str) -> Result<Self> {
        let root = XmlElementNode::parse(xml)?;
        Self::from_root(&root)
    }

    pub fn from_root(root: &XmlElementNode) -> Result<Self> {
        let allowed_hosts = root
            .descendants(AllowedHosts::TAG)
            .first()
            .map(|element| AllowedHosts::from_xml(element))
            .transpose()?;

        let shipping_methods = root
            .descendants(ShippingMethod::TAG)
            .into_iter()
            .map(ShippingMethod::from_xml)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Parsed <{}>: {} allowed hosts, {} shipping methods",
            root.name(),
            allowed_hosts.as_ref().map_or(0, |h| h.hosts().len()),
            shipping_methods.len()
        );

        Ok(Self {
            path: None,
            allowed_hosts,
            shipping_methods,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut manifest = Self::parse(&contents)?;
        manifest.path = Some(path.to_path_buf());
        Ok(manifest)
    }

    pub fn is_empty(&self) -> bool {
        self.allowed_hosts.is_none() && self.shipping_methods.is_empty()
    }

    /// Projection of every element for persistence
    pub fn to_array(&self, default_locale: &str) -> FieldMap {
        let mut data = FieldMap::new();

        if let Some(allowed_hosts) = &self.allowed_hosts {
            data.extend(allowed_hosts.to_array(default_locale));
        }

        data.insert(
            "shippingMethods".to_string(),
            Value::Array(
                self.shipping_methods
                    .iter()
                    .map(|method| Value::Object(method.to_array(default_locale)))
                    .collect(),
            ),
        );

        data
    }
}
