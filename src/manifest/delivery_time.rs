use super::element::{required, FieldMap, Fields, XmlElement};
use super::error::Result;
use crate::xml::XmlElementNode;
use serde_json::Value;

/// Delivery time window of a shipping method
///
/// `min <= max` is not checked; degenerate and inverted ranges are kept as
/// written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryTime {
    id: String,
    name: Option<String>,
    min: i64,
    max: i64,
    unit: String,
}

impl DeliveryTime {
    pub const REQUIRED_FIELDS: [&'static str; 4] = ["id", "min", "max", "unit"];

    fn from_fields(mut fields: Fields) -> Result<Self> {
        fields.validate_required_elements(&Self::REQUIRED_FIELDS)?;

        let delivery_time = Self {
            id: required(fields.take_string("id")?, Self::TAG, "id")?,
            name: fields.take_string("name")?,
            min: required(fields.take_int("min")?, Self::TAG, "min")?,
            max: required(fields.take_int("max")?, Self::TAG, "max")?,
            unit: required(fields.take_string("unit")?, Self::TAG, "unit")?,
        };
        fields.finish();

        Ok(delivery_time)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl XmlElement for DeliveryTime {
    const TAG: &'static str = "delivery-time";

    fn from_xml(element: &XmlElementNode) -> Result<Self> {
        Self::from_fields(Fields::from_children(Self::TAG, element))
    }

    fn to_array(&self, _default_locale: &str) -> FieldMap {
        let mut data = FieldMap::new();
        data.insert("id".to_string(), Value::String(self.id.clone()));
        if let Some(name) = &self.name {
            data.insert("name".to_string(), Value::String(name.clone()));
        }
        data.insert("min".to_string(), Value::from(self.min));
        data.insert("max".to_string(), Value::from(self.max));
        data.insert("unit".to_string(), Value::String(self.unit.clone()));
        data
    }
}
