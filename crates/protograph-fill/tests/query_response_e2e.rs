//! End-to-end query-response construction.
//!
//! Drives the full path an embedding server would: register a descriptor
//! tree, take a raw JSON execution result, convert it to the closed
//! source-value union, fill a typed message, and wrap it in the result
//! envelope next to the engine's error list.

use std::sync::Arc;

use serde_json::json;

use protograph_fill::{
    fill_from_message, ExecutionError, ExecutionResult, FieldValue, Message, SourceValue,
    TypedValue,
};
use protograph_schema::{
    Cardinality, Descriptor, DescriptorRegistry, EnumDescriptor, EnumMember, FieldDefinition,
    FieldType,
};

/// Build and register the descriptor tree for an order-lookup response.
fn registry() -> DescriptorRegistry {
    let currency = Arc::new(
        EnumDescriptor::new(
            "shop.Currency",
            vec![
                EnumMember::new("USD", 0),
                EnumMember::new("EUR", 1),
                EnumMember::new("PKR", 2),
            ],
        )
        .unwrap(),
    );
    let line_item = Arc::new(
        Descriptor::new(
            "shop.LineItem",
            vec![
                FieldDefinition::singular("sku", FieldType::String),
                FieldDefinition::singular("quantity", FieldType::Uint32),
                FieldDefinition::singular("unit_price", FieldType::Float),
            ],
        )
        .unwrap(),
    );
    let order = Arc::new(
        Descriptor::new(
            "shop.Order",
            vec![
                FieldDefinition::singular("order_id", FieldType::String),
                FieldDefinition::singular("user_id", FieldType::Uint64),
                FieldDefinition::singular("currency", FieldType::Enum(currency.clone())),
                FieldDefinition::new(
                    "line_items",
                    FieldType::Message(line_item.clone()),
                    Cardinality::Repeated,
                ),
            ],
        )
        .unwrap(),
    );

    let mut registry = DescriptorRegistry::new();
    registry.register_enum(currency).unwrap();
    registry.register_message(line_item).unwrap();
    registry.register_message(order).unwrap();
    registry
}

fn response_mapping(json: serde_json::Value) -> Vec<(String, SourceValue)> {
    match SourceValue::from(json) {
        SourceValue::Mapping(entries) => entries,
        other => panic!("expected mapping, got {}", other.shape_name()),
    }
}

#[test]
fn full_response_builds_typed_order() {
    let registry = registry();
    let order = registry.require_message("shop.Order").unwrap();

    let fields = response_mapping(json!({
        "orderId": "ord-991",
        "userId": 7,
        "currency": "PKR",
        "lineItems": [
            {"sku": "A-1", "quantity": 2, "unitPrice": "1.5"},
            {"sku": "B-2", "quantity": 1, "unitPrice": 9.75}
        ],
        "cacheHint": "ignored-by-schema",
        "promoCode": null
    }));

    let seed = Message::empty(order.clone());
    let message = fill_from_message(&seed, Some(&fields)).unwrap();

    assert_eq!(
        message.get("order_id"),
        Some(&FieldValue::Singular(TypedValue::Str(
            "ord-991".to_string()
        )))
    );
    assert_eq!(
        message.get("user_id"),
        Some(&FieldValue::Singular(TypedValue::U64(7)))
    );
    match message.get("currency") {
        Some(FieldValue::Singular(TypedValue::Enum(member))) => {
            assert_eq!(member.name(), "PKR");
            assert_eq!(member.number(), 2);
        }
        other => panic!("expected resolved currency, got {other:?}"),
    }

    let items = match message.get("line_items") {
        Some(FieldValue::Repeated(items)) => items,
        other => panic!("expected repeated line items, got {other:?}"),
    };
    assert_eq!(items.len(), 2);
    match &items[0] {
        TypedValue::Message(item) => {
            // The narrow float came from a decimal string.
            assert_eq!(
                item.get("unit_price"),
                Some(&FieldValue::Singular(TypedValue::F32(1.5f32)))
            );
        }
        other => panic!("expected line item message, got {other:?}"),
    }

    // Fields outside the schema never appear.
    assert!(message.get("cache_hint").is_none());
    assert_eq!(message.len(), 4);
}

#[test]
fn envelope_carries_engine_errors_beside_the_message() {
    let registry = registry();
    let order = registry.require_message("shop.Order").unwrap();

    let fields = response_mapping(json!({"orderId": "ord-1", "userId": null}));
    let message = fill_from_message(&Message::empty(order.clone()), Some(&fields)).unwrap();

    let result = ExecutionResult::new(
        message,
        vec![ExecutionError::at_path(
            "userId resolver timed out",
            vec!["order".to_string(), "userId".to_string()],
        )],
    );
    assert!(!result.is_clean());
    assert_eq!(result.message().get("user_id"), None);
    assert_eq!(
        result.message().get("order_id"),
        Some(&FieldValue::Singular(TypedValue::Str("ord-1".to_string())))
    );

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["message"]["order_id"], "ord-1");
    assert_eq!(json["errors"][0]["path"][1], "userId");
}

#[test]
fn failed_conversion_produces_no_envelope_at_all() {
    let registry = registry();
    let order = registry.require_message("shop.Order").unwrap();

    let fields = response_mapping(json!({"currency": "GBP"}));
    let err = fill_from_message(&Message::empty(order.clone()), Some(&fields)).unwrap_err();
    assert_eq!(
        format!("{err}"),
        "field `currency`: `GBP` is not a member of enum `shop.Currency`"
    );
}

#[test]
fn merge_then_refill_overwrites_only_selected_fields() {
    let registry = registry();
    let order = registry.require_message("shop.Order").unwrap();

    let first = fill_from_message(
        &Message::empty(order.clone()),
        Some(&response_mapping(json!({"orderId": "ord-1", "userId": 7}))),
    )
    .unwrap();
    let second = fill_from_message(
        &first,
        Some(&response_mapping(json!({"orderId": "ord-2"}))),
    )
    .unwrap();

    assert_eq!(
        second.get("order_id"),
        Some(&FieldValue::Singular(TypedValue::Str("ord-2".to_string())))
    );
    // Untouched by the second response, carried from the first.
    assert_eq!(
        second.get("user_id"),
        Some(&FieldValue::Singular(TypedValue::U64(7)))
    );
}
