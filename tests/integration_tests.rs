// Integration tests for vouch-core using test fixtures
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use vouch_core::{
    array_of, check_json, check_yaml, indexed_object_of, is_boolean, is_exactly, is_number,
    is_string, object_of, one_of, optional, voidable, CheckError, ObjectOf, Parser, ParserExt,
};

fn get_test_file_path(subdir: &str, filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join(subdir)
        .join(filename)
}

fn read_test_file(subdir: &str, filename: &str) -> String {
    let path = get_test_file_path(subdir, filename);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {:?}", path))
}

fn order_parser() -> ObjectOf {
    object_of! {
        "id" => is_string,
        "status" => one_of![is_exactly("pending"), is_exactly("paid"), is_exactly("refunded")],
        "customer" => object_of! {
            "name" => is_string,
            "email" => optional(is_string),
        },
        "items" => array_of(object_of! {
            "sku" => is_string,
            "quantity" => is_number,
            "price" => is_number,
        }),
        "metadata" => indexed_object_of(is_string),
        "gift" => voidable(is_boolean),
    }
}

#[derive(Debug, PartialEq, Deserialize)]
struct Order {
    id: String,
    status: String,
    customer: Customer,
    items: Vec<Item>,
    metadata: BTreeMap<String, String>,
    gift: Option<bool>,
}

#[derive(Debug, PartialEq, Deserialize)]
struct Customer {
    name: String,
    email: Option<String>,
}

#[derive(Debug, PartialEq, Deserialize)]
struct Item {
    sku: String,
    quantity: u32,
    price: f64,
}

fn rejection_reason(subdir: &str, filename: &str) -> String {
    let source = read_test_file(subdir, filename);
    match check_json(&order_parser(), &source, filename) {
        Ok(record) => panic!("Expected {filename} to be rejected, got {record:?}"),
        Err(CheckError::Validation { failure }) => failure.reason,
        Err(other) => panic!("Expected a validation error, got {other:?}"),
    }
}

// Tests for valid bodies that should decode and validate successfully
mod ok_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_order() {
        let source = read_test_file("ok", "order.json");
        let result = check_json(&order_parser().typed::<Order>(), &source, "order.json");
        assert!(result.is_ok(), "Should validate successfully: {:?}", result.err());

        let order = result.unwrap();
        assert_eq!(order.status, "paid");
        assert_eq!(order.customer.email, None);
        assert_eq!(order.gift, Some(true));
        assert_eq!(
            order.items,
            vec![
                Item { sku: "BK-001".to_string(), quantity: 2, price: 12.5 },
                Item { sku: "PN-017".to_string(), quantity: 1, price: 3.0 },
            ]
        );
        assert_eq!(order.metadata.get("campaign").map(String::as_str), Some("autumn"));
    }

    #[test]
    fn test_minimal_order_omits_absent_gift() {
        let source = read_test_file("ok", "order_minimal.json");
        let record = check_json(&order_parser(), &source, "order_minimal.json").unwrap();
        assert!(!record.contains_key("gift"));
        assert_eq!(
            record.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["customer", "id", "items", "metadata", "status"]
        );
    }

    #[test]
    fn test_yaml_order() {
        let source = read_test_file("ok", "order.yaml");
        let order = check_yaml(&order_parser().typed::<Order>(), &source, "order.yaml").unwrap();
        assert_eq!(order.id, "ord_1044");
        assert_eq!(order.items[0].quantity, 3);
        assert_eq!(order.gift, None);
    }

    #[test]
    fn test_validated_output_revalidates() {
        let parser = order_parser();
        for file in ["order.json", "order_minimal.json"] {
            let source = read_test_file("ok", file);
            let record = check_json(&parser, &source, file).unwrap();
            let again = parser.parse(&record.clone().into());
            assert_eq!(again.into_result().unwrap(), record);
        }
    }
}

// Tests for bodies that must be rejected, with the exact path-qualified reason
mod bad_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrong_status() {
        assert_eq!(
            rejection_reason("bad", "wrong_status.json"),
            "Failed at 'status': 'shipped' did not match any of 3 validators"
        );
    }

    #[test]
    fn test_bad_quantity() {
        assert_eq!(
            rejection_reason("bad", "bad_quantity.json"),
            "Failed at 'items': Failed at '1': Failed at 'quantity': typeof value is string"
        );
    }

    #[test]
    fn test_missing_email_is_not_null() {
        assert_eq!(
            rejection_reason("bad", "missing_email.json"),
            "Failed at 'customer': Failed at 'email': typeof value is undefined"
        );
    }

    #[test]
    fn test_metadata_value_not_string() {
        assert_eq!(
            rejection_reason("bad", "metadata_number.json"),
            "Failed at 'metadata': Failed at 'retries': typeof value is number"
        );
    }

    #[test]
    fn test_malformed_body() {
        let source = read_test_file("bad", "malformed.json");
        let result = check_json(&order_parser(), &source, "malformed.json");
        assert!(matches!(result, Err(CheckError::Decode { .. })));
    }
}
