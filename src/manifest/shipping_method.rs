use super::delivery_time::DeliveryTime;
use super::element::{
    ensure_translation_for_default_locale, kebab_case_to_camel_case, required, translations_to_value,
    FieldMap, Fields, Translations, XmlElement,
};
use super::error::Result;
use crate::xml::XmlElementNode;
use serde_json::{json, Value};

/// Position given to shipping methods that do not declare one
pub const POSITION_DEFAULT: i64 = 1;

/// A shipping method provided by an app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingMethod {
    identifier: String,
    name: Translations,
    description: Translations,
    icon: Option<String>,
    position: i64,
    tracking_url: Translations,
    delivery_time: DeliveryTime,
}

impl ShippingMethod {
    pub const TRANSLATABLE_FIELDS: [&'static str; 3] = ["name", "description", "tracking-url"];

    pub const REQUIRED_FIELDS: [&'static str; 3] = ["identifier", "name", "deliveryTime"];

    fn parse(element: &XmlElementNode) -> Result<Fields<DeliveryTime>> {
        let mut fields = Fields::new(Self::TAG);

        for child in element.child_elements() {
            if Self::TRANSLATABLE_FIELDS.contains(&child.name()) {
                fields.insert_translated(child);
                continue;
            }

            if child.name() == DeliveryTime::TAG {
                fields.insert_element(child.name(), DeliveryTime::from_xml(child)?);
                continue;
            }

            fields.insert_scalar(child.name(), child.text_content());
        }

        Ok(fields)
    }

    fn from_fields(mut fields: Fields<DeliveryTime>) -> Result<Self> {
        fields.validate_required_elements(&Self::REQUIRED_FIELDS)?;

        let shipping_method = Self {
            identifier: required(fields.take_string("identifier")?, Self::TAG, "identifier")?,
            name: fields.take_translations("name")?,
            description: fields.take_translations("description")?,
            icon: fields.take_string("icon")?,
            position: fields.take_int("position")?.unwrap_or(POSITION_DEFAULT),
            tracking_url: fields.take_translations("trackingUrl")?,
            delivery_time: required(fields.take_element("deliveryTime")?, Self::TAG, "deliveryTime")?,
        };
        fields.finish();

        Ok(shipping_method)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &Translations {
        &self.name
    }

    pub fn description(&self) -> &Translations {
        &self.description
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn tracking_url(&self) -> &Translations {
        &self.tracking_url
    }

    pub fn delivery_time(&self) -> &DeliveryTime {
        &self.delivery_time
    }

    fn translations(&self, field: &str) -> Option<&Translations> {
        match field {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "trackingUrl" => Some(&self.tracking_url),
            _ => None,
        }
    }
}

impl XmlElement for ShippingMethod {
    const TAG: &'static str = "shipping-method";

    fn from_xml(element: &XmlElementNode) -> Result<Self> {
        Self::from_fields(Self::parse(element)?)
    }

    /// Projection for persistence
    ///
    /// Translated fields always carry `default_locale`, the identifier moves
    /// to `appShippingMethod.identifier`, and the delivery time is flattened.
    fn to_array(&self, default_locale: &str) -> FieldMap {
        let mut data = FieldMap::new();

        for field in Self::TRANSLATABLE_FIELDS {
            let field = kebab_case_to_camel_case(field);
            if let Some(translations) = self.translations(&field) {
                let translations = ensure_translation_for_default_locale(translations, default_locale);
                data.insert(field, translations_to_value(&translations));
            }
        }

        if let Some(icon) = &self.icon {
            data.insert("icon".to_string(), Value::String(icon.clone()));
        }
        data.insert("position".to_string(), Value::from(self.position));
        data.insert(
            "appShippingMethod".to_string(),
            json!({ "identifier": self.identifier }),
        );
        data.insert(
            "deliveryTime".to_string(),
            Value::Object(self.delivery_time.to_array(default_locale)),
        );

        data
    }
}
