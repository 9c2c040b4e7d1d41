use retrace_data::{
    Assignable, Codec, CodecError, Codecs, Record, RecordDict, StringDict, Value,
};

fn string_dict_codec() -> Codec<StringDict> {
    Codec {
        encode: |d| Ok(d.to_value()),
        decode: |v| {
            let mut d = StringDict::new();
            d.try_assign(v)?;
            Ok(d)
        },
    }
}

fn record_dict_codec() -> Codec<RecordDict> {
    Codec {
        encode: |d| Ok(d.to_value()),
        decode: |v| {
            let mut d = RecordDict::new();
            d.try_assign(v)?;
            Ok(d)
        },
    }
}

fn registry() -> Codecs {
    let mut codecs = Codecs::new();
    codecs.register(string_dict_codec()).unwrap();
    codecs.register(record_dict_codec()).unwrap();
    codecs
}

#[test]
fn string_dict_round_trip_is_field_wise_equal() {
    let codecs = registry();
    let original: StringDict = [("cat".to_string(), "meow".to_string()),
        ("dog".to_string(), "woof".to_string())]
    .into_iter()
    .collect();

    let wire = codecs.encode(&original).unwrap();
    let back: StringDict = codecs.decode(&wire).unwrap();
    assert_eq!(back, original);
}

#[test]
fn record_dict_round_trip_preserves_owned_chains() {
    let codecs = registry();
    let mut original = RecordDict::new();
    original.add(100, Record::new("baldrick"));
    original.add(7, Record::with_child("ccc", Record::new("ddd")));

    let wire = codecs.encode(&original).unwrap();
    let back: RecordDict = codecs.decode(&wire).unwrap();
    assert_eq!(back, original);
}

#[test]
fn unregistered_type_is_reported() {
    let codecs = Codecs::new();
    let d = StringDict::new();
    assert!(matches!(
        codecs.encode(&d),
        Err(CodecError::NotRegistered { .. })
    ));
    assert!(matches!(
        codecs.decode::<StringDict>(&Value::Null),
        Err(CodecError::NotRegistered { .. })
    ));
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut codecs = registry();
    assert!(matches!(
        codecs.register(string_dict_codec()),
        Err(CodecError::AlreadyRegistered { .. })
    ));
}

#[test]
fn decode_failure_propagates_shape_mismatch() {
    let codecs = registry();
    let err = codecs.decode::<StringDict>(&Value::Int(1)).unwrap_err();
    assert!(matches!(err, CodecError::Assign(_)));
}
