//! appmanifest - Parse and validate app manifest XML
//!
//! This library turns the declarative XML manifest of a shop app into
//! immutable, validated configuration records.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! 1. **Discovery** - Find manifest files below a directory
//! 2. **XML** - Build an owned document tree with quick-xml
//! 3. **Elements** - Construct `AllowedHosts`, `ShippingMethod` and
//!    `DeliveryTime` records, validating required fields
//! 4. **Projection** - Flatten records into plain mappings (`to_array`)
//! 5. **Reporting** - Output results as terminal text or JSON

pub mod config;
pub mod discovery;
pub mod manifest;
pub mod report;
pub mod xml;

pub use config::Config;
pub use discovery::ManifestFinder;
pub use manifest::{
    AllowedHosts, DeliveryTime, Manifest, ManifestError, ShippingMethod, Translations, XmlElement,
};
pub use report::{ParsedManifest, ReportFormat, Reporter};
pub use xml::{XmlElementNode, XmlError, XmlNode};
