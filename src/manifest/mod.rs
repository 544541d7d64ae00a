//! App manifest elements
//!
//! Each element type is constructed from its manifest node, validates its
//! required fields at construction and is immutable afterwards. `to_array`
//! produces the plain mapping the persistence layer consumes.

mod allowed_hosts;
mod delivery_time;
mod document;
mod element;
mod error;
mod scalar;
mod shipping_method;

pub use allowed_hosts::AllowedHosts;
pub use delivery_time::DeliveryTime;
pub use document::Manifest;
pub use element::{
    ensure_translation_for_default_locale, kebab_case_to_camel_case, locale_of, FieldMap, Fields,
    Translations, XmlElement, FALLBACK_LOCALE,
};
pub use error::{ManifestError, Result};
pub use scalar::{phpize, Scalar};
pub use shipping_method::{ShippingMethod, POSITION_DEFAULT};
