use super::element::{FieldMap, XmlElement};
use super::error::Result;
use crate::xml::XmlElementNode;
use serde_json::Value;

/// Hosts an app may talk to, in manifest order
///
/// Entries are taken as written: no format check, duplicates kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedHosts {
    allowed_hosts: Vec<String>,
}

impl AllowedHosts {
    pub fn from_array(allowed_hosts: Vec<String>) -> Self {
        Self { allowed_hosts }
    }

    pub fn hosts(&self) -> &[String] {
        &self.allowed_hosts
    }
}

impl XmlElement for AllowedHosts {
    const TAG: &'static str = "allowed-hosts";

    fn from_xml(element: &XmlElementNode) -> Result<Self> {
        let allowed_hosts = element
            .child_elements()
            .map(XmlElementNode::text_content)
            .collect();

        Ok(Self { allowed_hosts })
    }

    fn to_array(&self, _default_locale: &str) -> FieldMap {
        let mut data = FieldMap::new();
        data.insert(
            "allowedHosts".to_string(),
            Value::Array(self.allowed_hosts.iter().cloned().map(Value::String).collect()),
        );
        data
    }
}
