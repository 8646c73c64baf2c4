#![allow(clippy::expect_used, clippy::unwrap_used)]

use stacuity_model::{
    ConversionError, Direction, Record, Value, convert, convert_from_wire, convert_to_wire,
};

// ---------------------------------------------------------------------------
// Fixture models
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct EventMapRef {
    id: String,
    moniker: String,
    name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct VSliceItem {
    id: String,
    name: String,
    moniker: String,
    dns_servers: Vec<String>,
    event_map: Option<EventMapRef>,
    endpoint_count: i32,
    active: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct EventMapModel {
    id: Value<String>,
    moniker: Value<String>,
    name: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct VSliceModel {
    id: Value<String>,
    name: Value<String>,
    moniker: Value<String>,
    dns_servers: Vec<Value<String>>,
    event_map: Option<EventMapModel>,
    endpoint_count: Value<i32>,
    active: Value<bool>,
}

/// Same as `VSliceModel` but without `endpoint_count` and `active`.
#[derive(Debug, Default, Clone, PartialEq, Record)]
struct SlimVSliceModel {
    name: Value<String>,
    moniker: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct RuleItem {
    description: String,
    transport_protocol: Option<String>,
    precedence: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct RuleModel {
    description: Value<String>,
    transport_protocol: Value<String>,
    precedence: Value<i32>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct ModifyItem {
    name: String,
    event_map: String,
    steering_profile: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct ResourceModel {
    name: Value<String>,
    #[record(only = "to_wire")]
    event_map: Value<String>,
    steering_profile: Value<String>,
    #[record(skip, rename = "name")]
    shadow: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct ReadItemWithRecord {
    name: String,
    event_map: EventMapRef,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct RenamedModel {
    #[record(rename = "moniker")]
    handle: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct BadRuleModel {
    description: Value<String>,
    precedence: Value<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct PolicyItem {
    name: String,
    routing_policy_rules: Vec<RuleItem>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct BadPolicyModel {
    name: Value<String>,
    routing_policy_rules: Vec<BadRuleModel>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct NodeItem {
    name: String,
    children: Vec<NodeItem>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct NodeModel {
    name: Value<String>,
    children: Vec<NodeModel>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct BadNodeModel {
    name: Value<i32>,
    children: Vec<BadNodeModel>,
}

fn known(value: &str) -> Value<String> {
    Value::known(value)
}

fn node(name: &str, children: Vec<NodeItem>) -> NodeItem {
    NodeItem {
        name: name.into(),
        children,
    }
}

fn vslice_item() -> VSliceItem {
    VSliceItem {
        id: "b7c1".into(),
        name: "vslice-A".into(),
        moniker: "vs-a".into(),
        dns_servers: vec!["8.8.8.8".into(), "1.1.1.1".into()],
        event_map: None,
        endpoint_count: 4,
        active: true,
    }
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

#[test]
fn scalars_round_trip() {
    let item = vslice_item();
    let mut model = VSliceModel::default();
    convert_from_wire(&item, &mut model).unwrap();

    assert_eq!(model.id, known("b7c1"));
    assert_eq!(model.endpoint_count, Value::Known(4));
    assert_eq!(model.active, Value::Known(true));

    let mut back = VSliceItem::default();
    convert_to_wire(&model, &mut back).unwrap();
    assert_eq!(back, item);
}

#[test]
fn from_wire_zero_values_become_known() {
    let item = VSliceItem::default();
    let mut model = VSliceModel::default();
    convert_from_wire(&item, &mut model).unwrap();

    assert_eq!(model.name, known(""));
    assert_eq!(model.endpoint_count, Value::Known(0));
    assert_eq!(model.active, Value::Known(false));
}

#[test]
fn to_wire_null_and_unknown_become_zero() {
    let model = VSliceModel {
        name: Value::Null,
        moniker: Value::Unknown,
        endpoint_count: Value::Unknown,
        active: Value::Null,
        ..Default::default()
    };
    let mut item = vslice_item();
    convert_to_wire(&model, &mut item).unwrap();

    assert_eq!(item.name, "");
    assert_eq!(item.moniker, "");
    assert_eq!(item.endpoint_count, 0);
    assert!(!item.active);
}

#[test]
fn to_wire_null_into_optional_scalar_is_absent() {
    let model = ResourceModel {
        name: known("eg-1"),
        event_map: known("em-1"),
        steering_profile: Value::Null,
        shadow: Value::Null,
    };
    let mut item = ModifyItem {
        steering_profile: Some("stale".into()),
        ..Default::default()
    };
    convert_to_wire(&model, &mut item).unwrap();

    assert_eq!(item.name, "eg-1");
    assert_eq!(item.event_map, "em-1");
    assert_eq!(item.steering_profile, None);

    let model = ResourceModel {
        steering_profile: Value::Unknown,
        ..model
    };
    convert_to_wire(&model, &mut item).unwrap();
    assert_eq!(item.steering_profile, None);

    let model = ResourceModel {
        steering_profile: known("sp-eu"),
        ..model
    };
    convert_to_wire(&model, &mut item).unwrap();
    assert_eq!(item.steering_profile.as_deref(), Some("sp-eu"));
}

#[test]
fn unknown_passes_through_between_value_models() {
    let source = EventMapModel {
        id: Value::Unknown,
        moniker: Value::Null,
        name: known("em"),
    };
    for direction in [Direction::FromWire, Direction::ToWire] {
        let mut destination = EventMapModel::default();
        convert(&source, &mut destination, direction).unwrap();
        assert_eq!(destination, source);
    }
}

// ---------------------------------------------------------------------------
// Optional references
// ---------------------------------------------------------------------------

#[test]
fn absent_optional_leaves_destination_untouched() {
    let item = vslice_item();

    let mut model = VSliceModel::default();
    convert_from_wire(&item, &mut model).unwrap();
    assert!(model.event_map.is_none());

    let existing = EventMapModel {
        id: known("keep"),
        ..Default::default()
    };
    let mut model = VSliceModel {
        event_map: Some(existing.clone()),
        ..Default::default()
    };
    convert_from_wire(&item, &mut model).unwrap();
    assert_eq!(model.event_map, Some(existing));
}

#[test]
fn present_optional_allocates_and_fills() {
    let item = VSliceItem {
        event_map: Some(EventMapRef {
            id: "e1".into(),
            moniker: "em-ops".into(),
            name: "Ops".into(),
        }),
        ..vslice_item()
    };
    let mut model = VSliceModel::default();
    convert_from_wire(&item, &mut model).unwrap();

    assert_eq!(
        model.event_map,
        Some(EventMapModel {
            id: known("e1"),
            moniker: known("em-ops"),
            name: known("Ops"),
        })
    );
}

#[test]
fn present_optional_reuses_allocated_destination() {
    let item = VSliceItem {
        event_map: Some(EventMapRef {
            id: "e2".into(),
            ..Default::default()
        }),
        ..vslice_item()
    };
    let mut model = VSliceModel {
        event_map: Some(EventMapModel {
            id: known("old"),
            moniker: Value::Unknown,
            name: Value::Unknown,
        }),
        ..Default::default()
    };
    convert_from_wire(&item, &mut model).unwrap();

    let event_map = model.event_map.unwrap();
    assert_eq!(event_map.id, known("e2"));
    assert_eq!(event_map.moniker, known(""));
}

#[test]
fn optional_scalar_source_skips_when_absent() {
    let mut model = RuleModel {
        transport_protocol: Value::Unknown,
        ..Default::default()
    };
    let item = RuleItem {
        description: "allow dns".into(),
        transport_protocol: None,
        precedence: 10,
    };
    convert_from_wire(&item, &mut model).unwrap();
    assert_eq!(model.transport_protocol, Value::Unknown);

    let item = RuleItem {
        transport_protocol: Some("udp".into()),
        ..item
    };
    convert_from_wire(&item, &mut model).unwrap();
    assert_eq!(model.transport_protocol, known("udp"));
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

#[test]
fn sequence_preserves_order_and_length() {
    let item = VSliceItem {
        dns_servers: vec!["8.8.8.8".into(), "1.1.1.1".into(), "9.9.9.9".into()],
        ..Default::default()
    };
    let mut model = VSliceModel {
        dns_servers: vec![known("stale"); 5],
        ..Default::default()
    };
    convert_from_wire(&item, &mut model).unwrap();

    assert_eq!(
        model.dns_servers,
        vec![
            known("8.8.8.8"),
            known("1.1.1.1"),
            known("9.9.9.9"),
        ]
    );
}

#[test]
fn empty_sequence_clears_destination() {
    let item = VSliceItem::default();
    let mut model = VSliceModel {
        dns_servers: vec![known("1.1.1.1")],
        ..Default::default()
    };
    convert_from_wire(&item, &mut model).unwrap();
    assert!(model.dns_servers.is_empty());
}

#[test]
fn top_level_sequence_of_records() {
    let items = vec![
        RuleItem {
            description: "first".into(),
            transport_protocol: Some("tcp".into()),
            precedence: 1,
        },
        RuleItem {
            description: "second".into(),
            transport_protocol: None,
            precedence: 2,
        },
    ];
    let mut models: Vec<RuleModel> = Vec::new();
    convert_from_wire(&items, &mut models).unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].transport_protocol, known("tcp"));
    assert_eq!(models[1].description, known("second"));
    assert_eq!(models[1].transport_protocol, Value::Null);
    assert_eq!(models[1].precedence, Value::Known(2));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn sequence_into_single_record_is_shape_mismatch_without_writes() {
    let items = vec![vslice_item(), vslice_item()];
    let before = VSliceModel {
        name: known("untouched"),
        dns_servers: vec![known("10.0.0.1")],
        ..Default::default()
    };
    let mut model = before.clone();

    let err = convert_from_wire(&items, &mut model).unwrap_err();
    assert!(matches!(err, ConversionError::ShapeMismatch { .. }));
    assert_eq!(err.path(), "");
    assert_eq!(model, before);
}

#[test]
fn nested_type_error_reports_field_path() {
    let item = PolicyItem {
        name: "rp".into(),
        routing_policy_rules: vec![RuleItem::default()],
    };
    let mut model = BadPolicyModel {
        name: known("before"),
        ..Default::default()
    };

    let err = convert_from_wire(&item, &mut model).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnsupportedFieldType {
            path: "routing_policy_rules[].precedence".into(),
            direction: Direction::FromWire,
            from: "int32".into(),
            to: "Value<string>".into(),
        }
    );
    assert_eq!(model.name, known("before"));
}

#[test]
fn wrapped_source_is_unsupported_on_from_wire() {
    let model = EventMapModel::default();
    let mut item = EventMapRef::default();
    let err = convert_from_wire(&model, &mut item).unwrap_err();
    assert!(matches!(err, ConversionError::UnsupportedFieldType { .. }));
    assert_eq!(err.path(), "id");
}

#[test]
fn record_against_scalar_is_shape_mismatch() {
    let item = ReadItemWithRecord::default();
    let mut modify = ModifyItem::default();
    let err = convert_from_wire(&item, &mut modify).unwrap_err();
    assert!(matches!(err, ConversionError::ShapeMismatch { .. }));
    assert_eq!(err.path(), "event_map");
}

// ---------------------------------------------------------------------------
// Field matching
// ---------------------------------------------------------------------------

#[test]
fn unmatched_fields_are_ignored() {
    let item = vslice_item();
    let mut model = SlimVSliceModel::default();
    convert_from_wire(&item, &mut model).unwrap();
    assert_eq!(model.name, known("vslice-A"));
    assert_eq!(model.moniker, known("vs-a"));

    let mut back = vslice_item();
    back.name = "other".into();
    convert_to_wire(&model, &mut back).unwrap();
    assert_eq!(back.name, "vslice-A");
    assert_eq!(back.endpoint_count, 4);
}

#[test]
fn direction_restricted_field_is_left_out() {
    let item = ReadItemWithRecord {
        name: "vslice-A".into(),
        event_map: EventMapRef::default(),
    };
    let mut model = ResourceModel {
        event_map: known("em-1"),
        ..Default::default()
    };
    convert_from_wire(&item, &mut model).unwrap();

    assert_eq!(model.name, known("vslice-A"));
    assert_eq!(model.event_map, known("em-1"));
}

#[test]
fn skipped_field_is_never_written() {
    let model = ResourceModel {
        name: known("real"),
        shadow: known("ignored"),
        ..Default::default()
    };
    let mut item = ModifyItem::default();
    convert_to_wire(&model, &mut item).unwrap();
    assert_eq!(item.name, "real");
}

#[test]
fn renamed_field_matches_under_new_name() {
    let mut model = RenamedModel::default();
    convert_from_wire(&vslice_item(), &mut model).unwrap();
    assert_eq!(model.handle, known("vs-a"));
}

// ---------------------------------------------------------------------------
// Self-nested records
// ---------------------------------------------------------------------------

#[test]
fn self_nested_records_convert_as_a_tree() {
    let tree = node(
        "root",
        vec![node("left", vec![node("leaf", vec![])]), node("right", vec![])],
    );
    let mut model = NodeModel::default();
    convert_from_wire(&tree, &mut model).unwrap();

    assert_eq!(model.name, known("root"));
    assert_eq!(model.children.len(), 2);
    assert_eq!(model.children[0].name, known("left"));
    assert_eq!(model.children[0].children[0].name, known("leaf"));
    assert!(model.children[0].children[0].children.is_empty());
    assert!(model.children[1].children.is_empty());

    let mut back = NodeItem::default();
    convert_to_wire(&model, &mut back).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn self_nested_record_type_error_fails_without_writes() {
    let mut model = BadNodeModel::default();
    let err = convert_from_wire(&node("root", vec![node("child", vec![])]), &mut model)
        .unwrap_err();

    assert!(matches!(err, ConversionError::UnsupportedFieldType { .. }));
    assert_eq!(err.path(), "name");
    assert_eq!(model, BadNodeModel::default());
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[test]
fn vslice_end_to_end() {
    let item = VSliceItem {
        name: "vslice-A".into(),
        moniker: "vs-a".into(),
        dns_servers: vec!["8.8.8.8".into(), "1.1.1.1".into()],
        event_map: None,
        ..Default::default()
    };
    let mut model = VSliceModel::default();
    convert_from_wire(&item, &mut model).unwrap();

    assert_eq!(model.name, known("vslice-A"));
    assert_eq!(model.moniker, known("vs-a"));
    assert_eq!(
        model.dns_servers,
        vec![known("8.8.8.8"), known("1.1.1.1")]
    );
    assert!(model.event_map.is_none());
}
