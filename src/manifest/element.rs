// Shared contract for manifest elements
//
// Every element is built in two steps: child nodes are collected into a
// `Fields` buffer keyed by camelCase field name, then the element validates
// the required names and takes its known fields out one by one. Whatever is
// left in the buffer is unknown to the element and gets dropped with a warning.

use super::error::{ManifestError, Result};
use super::scalar::{phpize, Scalar};
use crate::xml::XmlElementNode;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::convert::Infallible;
use tracing::{debug, warn};

/// Locale assumed for translated tags without a locale attribute, and the
/// preferred source when back-filling a missing default locale
pub const FALLBACK_LOCALE: &str = "en-GB";

/// Attributes carrying the locale of a translated tag, in lookup order
const LOCALE_ATTRIBUTES: [&str; 2] = ["lang", "locale"];

/// Locale code to translated text, in document order
pub type Translations = IndexMap<String, String>;

/// Plain key/value projection of an element
pub type FieldMap = Map<String, Value>;

/// A configuration record constructed from a manifest node
pub trait XmlElement: Sized {
    /// Tag name of the element in the manifest
    const TAG: &'static str;

    fn from_xml(element: &XmlElementNode) -> Result<Self>;

    fn to_array(&self, default_locale: &str) -> FieldMap;
}

/// Convert a kebab-case tag name into a camelCase field name
pub fn kebab_case_to_camel_case(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    for (i, part) in tag.split('-').filter(|p| !p.is_empty()).enumerate() {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Locale of a translated tag
pub fn locale_of(element: &XmlElementNode) -> &str {
    LOCALE_ATTRIBUTES
        .iter()
        .find_map(|attr| element.attribute(attr).filter(|v| !v.is_empty()))
        .unwrap_or(FALLBACK_LOCALE)
}

/// Copy a translation into `default_locale` when it is missing
///
/// The fallback locale wins over the first translation in document order.
/// An empty mapping stays empty.
pub fn ensure_translation_for_default_locale(
    translations: &Translations,
    default_locale: &str,
) -> Translations {
    let mut result = translations.clone();
    if default_locale.is_empty() || result.contains_key(default_locale) {
        return result;
    }

    let source = translations
        .get(FALLBACK_LOCALE)
        .or_else(|| translations.values().next());

    if let Some(text) = source {
        result.insert(default_locale.to_string(), text.clone());
    }
    result
}

pub fn translations_to_value(translations: &Translations) -> Value {
    Value::Object(
        translations
            .iter()
            .map(|(locale, text)| (locale.clone(), Value::String(text.clone())))
            .collect(),
    )
}

/// A parsed child value before it is assigned to a typed field
#[derive(Debug, Clone)]
pub enum FieldValue<N> {
    Scalar { raw: String, value: Scalar },
    Translations(Translations),
    Element(N),
}

impl<N> FieldValue<N> {
    fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar { value, .. } => value.is_empty(),
            FieldValue::Translations(translations) => translations.is_empty(),
            FieldValue::Element(_) => false,
        }
    }

    fn describe(&self) -> String {
        match self {
            FieldValue::Scalar { raw, .. } => raw.clone(),
            FieldValue::Translations(_) => "translated text".to_string(),
            FieldValue::Element(_) => "a nested element".to_string(),
        }
    }
}

/// Parse buffer for one element, keyed by camelCase field name
///
/// `N` is the type of nested elements the owner accepts; leaf elements use
/// the default, which cannot be constructed.
#[derive(Debug)]
pub struct Fields<N = Infallible> {
    element: &'static str,
    values: IndexMap<String, FieldValue<N>>,
}

impl<N> Fields<N> {
    pub fn new(element: &'static str) -> Self {
        Self {
            element,
            values: IndexMap::new(),
        }
    }

    /// Collect every element child as a coerced scalar
    pub fn from_children(element: &'static str, node: &XmlElementNode) -> Self {
        let mut fields = Self::new(element);
        for child in node.child_elements() {
            fields.insert_scalar(child.name(), child.text_content());
        }
        fields
    }

    pub fn insert_scalar(&mut self, tag: &str, raw: String) {
        let value = phpize(&raw);
        self.insert(tag, FieldValue::Scalar { raw, value });
    }

    pub fn insert_element(&mut self, tag: &str, value: N) {
        self.insert(tag, FieldValue::Element(value));
    }

    /// Add a translated tag under its locale, keeping earlier locales
    pub fn insert_translated(&mut self, child: &XmlElementNode) {
        let field = kebab_case_to_camel_case(child.name());
        let locale = locale_of(child).to_string();
        let text = child.text_content().trim().to_string();

        let entry = self
            .values
            .entry(field)
            .or_insert_with(|| FieldValue::Translations(Translations::new()));

        match entry {
            FieldValue::Translations(translations) => {
                translations.insert(locale, text);
            }
            other => {
                let mut translations = Translations::new();
                translations.insert(locale, text);
                *other = FieldValue::Translations(translations);
            }
        }
    }

    fn insert(&mut self, tag: &str, value: FieldValue<N>) {
        let field = kebab_case_to_camel_case(tag);
        if self.values.insert(field.clone(), value).is_some() {
            debug!("<{}> repeats {}, keeping the last value", self.element, field);
        }
    }

    /// Fail on the first required field that is absent or empty
    pub fn validate_required_elements(&self, required: &[&'static str]) -> Result<()> {
        for &field in required {
            let present = self.values.get(field).is_some_and(|v| !v.is_empty());
            if !present {
                return Err(ManifestError::MissingRequiredField {
                    element: self.element,
                    field,
                });
            }
        }
        Ok(())
    }

    fn invalid(&self, field: &'static str, expected: &'static str, value: &FieldValue<N>) -> ManifestError {
        ManifestError::InvalidFieldValue {
            element: self.element,
            field,
            expected,
            value: value.describe(),
        }
    }

    /// Take a text field; the raw node text is kept as written
    pub fn take_string(&mut self, field: &'static str) -> Result<Option<String>> {
        match self.values.shift_remove(field) {
            None => Ok(None),
            Some(FieldValue::Scalar { value: Scalar::Null, .. }) => Ok(None),
            Some(FieldValue::Scalar { raw, .. }) => Ok(Some(raw)),
            Some(other) => Err(self.invalid(field, "text", &other)),
        }
    }

    pub fn take_int(&mut self, field: &'static str) -> Result<Option<i64>> {
        match self.values.shift_remove(field) {
            None => Ok(None),
            Some(FieldValue::Scalar { value: Scalar::Null, .. }) => Ok(None),
            Some(FieldValue::Scalar { value: Scalar::Int(value), .. }) => Ok(Some(value)),
            Some(other) => Err(self.invalid(field, "an integer", &other)),
        }
    }

    /// Take a translated field; absent fields yield an empty mapping
    pub fn take_translations(&mut self, field: &'static str) -> Result<Translations> {
        match self.values.shift_remove(field) {
            None => Ok(Translations::new()),
            Some(FieldValue::Translations(translations)) => Ok(translations),
            Some(other) => Err(self.invalid(field, "translated text", &other)),
        }
    }

    pub fn take_element(&mut self, field: &'static str) -> Result<Option<N>> {
        match self.values.shift_remove(field) {
            None => Ok(None),
            Some(FieldValue::Element(value)) => Ok(Some(value)),
            Some(other) => Err(self.invalid(field, "a nested element", &other)),
        }
    }

    /// Drop the fields no typed slot claimed
    pub fn finish(self) {
        for field in self.values.keys() {
            warn!("Ignoring unknown field {} in <{}>", field, self.element);
        }
    }
}

/// Required field lookup for typed extraction after validation
pub(crate) fn required<T>(value: Option<T>, element: &'static str, field: &'static str) -> Result<T> {
    value.ok_or(ManifestError::MissingRequiredField { element, field })
}
