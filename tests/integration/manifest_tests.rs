//! Integration tests for manifest parsing
//!
//! These tests parse the fixture manifests end to end and check the
//! projections handed to persistence.

use appmanifest::manifest::{Manifest, ManifestError, ShippingMethod, XmlElement, POSITION_DEFAULT};
use appmanifest::{Config, ManifestFinder, XmlElementNode};
use serde_json::{json, Value};
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn shipping_fixture() -> Manifest {
    Manifest::from_file(&fixtures_path().join("apps/SwagShipping/manifest.xml"))
        .expect("Failed to parse SwagShipping fixture")
}

// ============================================================================
// Fixture manifests
// ============================================================================

#[test]
fn test_shipping_fixture_elements() {
    let manifest = shipping_fixture();

    let hosts = manifest.allowed_hosts.as_ref().expect("allowed hosts");
    assert_eq!(
        hosts.hosts(),
        ["api.swag-shipping.example", "track.swag-shipping.example"]
    );

    assert_eq!(manifest.shipping_methods.len(), 2);

    let first = &manifest.shipping_methods[0];
    assert_eq!(first.identifier(), "swagFirstShippingMethod");
    assert_eq!(first.name()["en-GB"], "First shipping method");
    assert_eq!(first.name()["de-DE"], "Erste Versandmethode");
    assert_eq!(first.icon(), Some("icon.png"));
    assert_eq!(first.position(), 10);
    assert_eq!(first.delivery_time().id(), "c8864e36a4d84bd4a16cc31b5953431b");
    assert_eq!(first.delivery_time().name(), Some("Relatively long"));
    assert_eq!(first.delivery_time().min(), 2);
    assert_eq!(first.delivery_time().max(), 5);

    let second = &manifest.shipping_methods[1];
    assert_eq!(second.position(), POSITION_DEFAULT);
    assert!(second.description().is_empty());
    assert_eq!(second.icon(), None);
}

#[test]
fn test_shipping_fixture_projection() {
    let data = shipping_fixture().to_array("en-GB");

    assert_eq!(
        data["allowedHosts"],
        json!(["api.swag-shipping.example", "track.swag-shipping.example"])
    );

    let methods = data["shippingMethods"].as_array().expect("shipping methods");
    assert_eq!(methods.len(), 2);

    let first = &methods[0];
    assert_eq!(first["appShippingMethod"]["identifier"], "swagFirstShippingMethod");
    assert!(first.get("identifier").is_none());
    assert_eq!(first["trackingUrl"]["en-GB"], "https://www.carrier.example/track/%s");
    assert_eq!(
        first["deliveryTime"],
        json!({
            "id": "c8864e36a4d84bd4a16cc31b5953431b",
            "name": "Relatively long",
            "min": 2,
            "max": 5,
            "unit": "day",
        })
    );

    // only a German name: back-filled into the default locale
    let second = &methods[1];
    assert_eq!(second["name"]["en-GB"], "Zweite Versandmethode");
    assert_eq!(second["description"], json!({}));
}

#[test]
fn test_projection_for_other_default_locale() {
    let manifest = shipping_fixture();
    let data = manifest.shipping_methods[0].to_array("nl-NL");

    // en-GB is preferred over document order when back-filling
    assert_eq!(data["name"]["nl-NL"], "First shipping method");
    assert_eq!(data["description"]["nl-NL"], "This is a simple description");
}

#[test]
fn test_broken_fixture_names_field_and_element() {
    let err = Manifest::from_file(&fixtures_path().join("broken/SwagBroken/manifest.xml"))
        .unwrap_err();

    assert!(matches!(
        err,
        ManifestError::MissingRequiredField {
            element: "delivery-time",
            field: "unit"
        }
    ));
    assert_eq!(err.to_string(), "unit must not be empty in <delivery-time>");
}

#[test]
fn test_finder_discovers_fixture_apps() {
    let config = Config::default();
    let found = ManifestFinder::new(&config)
        .find(&fixtures_path().join("apps"))
        .expect("Failed to scan fixtures");

    let names: Vec<_> = found
        .iter()
        .filter_map(|p| p.parent()?.file_name()?.to_str().map(str::to_string))
        .collect();
    assert_eq!(names, vec!["SwagHosts", "SwagShipping"]);
}

// ============================================================================
// Scenario from the persistence contract
// ============================================================================

#[test]
fn test_dhl_scenario() {
    let xml = "<shipping-method><identifier>dhl</identifier><name locale=\"en-GB\">DHL</name>\
               <delivery-time><id>1</id><min>1</min><max>3</max><unit>day</unit></delivery-time>\
               </shipping-method>";

    let node = XmlElementNode::parse(xml).unwrap();
    let method = ShippingMethod::from_xml(&node).unwrap();

    assert_eq!(
        Value::Object(method.to_array("en-GB")),
        json!({
            "name": {"en-GB": "DHL"},
            "description": {},
            "trackingUrl": {},
            "position": 1,
            "appShippingMethod": {"identifier": "dhl"},
            "deliveryTime": {"id": "1", "min": 1, "max": 3, "unit": "day"},
        })
    );
}

#[test]
fn test_malformed_xml_is_rejected() {
    let err = Manifest::parse("<manifest><shipping-methods></manifest>").unwrap_err();
    assert!(matches!(err, ManifestError::Xml(_)));
}
