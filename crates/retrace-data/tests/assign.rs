use std::collections::HashMap;

use retrace_data::{
    AssignError, Assignable, DictValue, RawStringMap, Record, RecordDict, RecordValue, StringDict,
    Value,
};
use retrace_mem::Pointer;

fn string_map_value(entries: &[(&str, &str)]) -> Value {
    Value::Map(
        entries
            .iter()
            .map(|(k, v)| (Value::Str(k.to_string()), Value::Str(v.to_string())))
            .collect(),
    )
}

#[test]
fn assign_replaces_string_dict_wholesale() {
    let mut d: StringDict = [("old".to_string(), "entry".to_string())]
        .into_iter()
        .collect();
    d.try_assign(&string_map_value(&[("cat", "meow"), ("dog", "woof")]))
        .unwrap();
    assert_eq!(d.len(), 2);
    assert_eq!(d.get(&"cat".to_string()), "meow");
    assert!(!d.contains(&"old".to_string()));
}

#[test]
fn assign_shape_mismatch_leaves_target_unmodified() {
    let mut d: StringDict = [("cat".to_string(), "meow".to_string())]
        .into_iter()
        .collect();
    let before = d.clone();

    // Not a map at all.
    let err = d.try_assign(&Value::Int(42)).unwrap_err();
    assert!(matches!(err, AssignError::ShapeMismatch { .. }));
    assert_eq!(d, before);

    // A map, but with an incompatible value shape in the second entry; the
    // partially-built copy must not leak into the target.
    let bad = Value::Map(vec![
        (Value::Str("ok".into()), Value::Str("fine".into())),
        (Value::Str("bad".into()), Value::Int(9)),
    ]);
    assert!(d.try_assign(&bad).is_err());
    assert_eq!(d, before);
}

#[test]
fn assign_record_dict() {
    let mut d = RecordDict::new();
    let source = Value::Map(vec![(
        Value::Int(100),
        Value::Record(RecordValue::with_child("ccc", RecordValue::new("ddd"))),
    )]);
    d.try_assign(&source).unwrap();
    assert_eq!(
        d.lookup(&100),
        Some(&Record::with_child("ccc", Record::new("ddd")))
    );
    assert_eq!(d.lookup(&100).unwrap().depth(), 2);

    let before = d.clone();
    let bad = Value::Map(vec![(Value::Str("not int".into()), Value::Record(RecordValue::new("x")))]);
    assert!(d.try_assign(&bad).is_err());
    assert_eq!(d, before);
}

#[test]
fn assign_raw_string_map() {
    let mut m = RawStringMap::new();
    m.try_assign(&string_map_value(&[("eyes", "see"), ("nose", "smells")]))
        .unwrap();
    assert_eq!(m.get("eyes"), Some(&"see".to_string()));
    assert_eq!(m.len(), 2);

    let before = m.clone();
    assert!(m.try_assign(&Value::Str("nope".into())).is_err());
    assert_eq!(m, before);
}

#[test]
fn assign_pointer() {
    let mut p = Pointer::NULL;
    p.try_assign(&Value::Pointer(0x123)).unwrap();
    assert_eq!(p, Pointer::new(0x123));

    let err = p.try_assign(&Value::Str("0x123".into())).unwrap_err();
    assert_eq!(
        err,
        AssignError::ShapeMismatch {
            expected: "pointer",
            actual: "string",
        }
    );
    assert_eq!(p, Pointer::new(0x123));
}

#[test]
fn dict_value_dispatches_over_shapes() {
    let mut shapes = vec![
        DictValue::StringToString(StringDict::new()),
        DictValue::IntToRecord(RecordDict::new()),
        DictValue::RawStringMap(HashMap::new()),
    ];

    let string_source = string_map_value(&[("bird", "tweet")]);
    let record_source = Value::Map(vec![(Value::Int(1), Value::Record(RecordValue::new("r")))]);

    for shape in &mut shapes {
        let source = match shape {
            DictValue::IntToRecord(_) => &record_source,
            _ => &string_source,
        };
        shape.try_assign(source).unwrap();
        assert_eq!(shape.len(), 1);
    }

    // Wrong source shape fails without touching the target, for every variant.
    for shape in &mut shapes {
        let before = shape.clone();
        assert!(shape.try_assign(&Value::Bool(true)).is_err());
        assert_eq!(*shape, before);
    }
}

#[test]
fn assign_from_encoded_value_round_trips() {
    let original: StringDict = [("cat".to_string(), "meow".to_string()),
        ("dog".to_string(), "woof".to_string())]
    .into_iter()
    .collect();

    let mut copy = StringDict::new();
    copy.try_assign(&original.to_value()).unwrap();
    assert_eq!(copy, original);
}
