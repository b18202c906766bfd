//! Detail fetcher tests against the scripted transport.

mod common;

use serde_json::json;
use storefront_sdk::{ErrorKind, StorefrontError};

// ---------------------------------------------------------------------------
// fetch
// ---------------------------------------------------------------------------

#[test]
fn fetch_returns_requested_id() {
    let sdk = common::sdk_with(common::sample_transport());

    for id in [1, 2, 3] {
        assert_eq!(sdk.detail().fetch(id).unwrap().id, id);
    }
}

#[test]
fn fetch_copies_every_field_and_discounts() {
    let sdk = common::sdk_with(common::sample_transport());

    let detail = sdk.detail().fetch(1).unwrap();
    assert_eq!(detail.title, "Backpack");
    assert_eq!(detail.description, "Description of Backpack");
    assert_eq!(detail.category, "electronics");
    assert_eq!(detail.image_url, "https://img.example/1.jpg");
    assert_eq!(detail.price, 88.0);
    assert!(detail.discount);
}

#[test]
fn fetch_boundary_price_is_not_discounted() {
    let sdk = common::sdk_with(common::sample_transport());

    let detail = sdk.detail().fetch(2).unwrap();
    assert_eq!(detail.price, 50.0);
    assert!(!detail.discount);
}

#[test]
fn fetch_requests_product_path() {
    let transport = common::sample_transport();
    let requests = transport.requests();
    let sdk = common::sdk_with(transport);

    sdk.detail().fetch(3).unwrap();
    assert_eq!(*requests.lock().unwrap(), vec!["products/3".to_string()]);
}

#[test]
fn missing_description_and_category_default_to_empty() {
    let transport = common::ScriptedTransport::new().json(
        "products/5",
        json!({ "id": 5, "title": "Bare", "price": 12.5, "image": "x" }),
    );
    let sdk = common::sdk_with(transport);

    let detail = sdk.detail().fetch(5).unwrap();
    assert_eq!(detail.description, "");
    assert_eq!(detail.category, "");
    assert_eq!(detail.price, 12.5);
}

// ---------------------------------------------------------------------------
// not found
// ---------------------------------------------------------------------------

#[test]
fn status_404_is_not_found() {
    let sdk = common::sdk_with(common::sample_transport());

    let err = sdk.detail().fetch(999).unwrap_err();
    assert!(matches!(err, StorefrontError::NotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn empty_success_body_is_not_found() {
    let transport = common::ScriptedTransport::new().raw("products/42", 200, "");
    let sdk = common::sdk_with(transport);

    assert_eq!(sdk.detail().fetch(42).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn null_body_is_not_found() {
    let transport = common::ScriptedTransport::new().raw("products/42", 200, "null");
    let sdk = common::sdk_with(transport);

    assert_eq!(sdk.detail().fetch(42).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn mismatched_id_is_not_found() {
    let transport = common::ScriptedTransport::new()
        .json("products/4", common::sample_product(5, "Other", 10.0));
    let sdk = common::sdk_with(transport);

    assert_eq!(sdk.detail().fetch(4).unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn get_maps_not_found_to_none() {
    let sdk = common::sdk_with(common::sample_transport());

    assert!(sdk.detail().get(999).unwrap().is_none());
    assert_eq!(sdk.detail().get(1).unwrap().unwrap().id, 1);
}

#[test]
fn get_keeps_other_errors() {
    let transport = common::ScriptedTransport::new().raw("products/1", 200, "{not json");
    let sdk = common::sdk_with(transport);

    assert_eq!(sdk.detail().get(1).unwrap_err().kind(), ErrorKind::Decode);
}
