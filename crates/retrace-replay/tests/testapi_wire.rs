//! Wire round-trips for the fixture payload: decode(encode(x)) must be
//! field-wise equal for every payload shape, including the dynamic map
//! shapes populated through `Assignable`.

use retrace_api::testapi::{self, Payload};
use retrace_data::{Codecs, Value};

fn codecs() -> Codecs {
    let mut codecs = Codecs::new();
    testapi::register_codecs(&mut codecs).unwrap();
    codecs
}

#[test]
fn sample_payloads_round_trip() {
    let codecs = codecs();
    for payload in [testapi::sample_p(), testapi::sample_q()] {
        let wire = codecs.encode(&payload).unwrap();
        let back: Payload = codecs.decode(&wire).unwrap();
        assert_eq!(back, payload);
    }
}

#[test]
fn default_payload_round_trips() {
    let codecs = codecs();
    let payload = Payload::default();
    let wire = codecs.encode(&payload).unwrap();
    let back: Payload = codecs.decode(&wire).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn record_chain_survives_the_wire() {
    let codecs = codecs();
    let payload = testapi::sample_p();

    let back: Payload = codecs.decode(&codecs.encode(&payload).unwrap()).unwrap();
    let chain = back.chain.expect("chain must survive");
    assert_eq!(chain.text, "ccc");
    assert_eq!(chain.child.as_deref().map(|c| c.text.as_str()), Some("ddd"));
    assert_eq!(chain.depth(), 2);
}

#[test]
fn malformed_wire_value_is_rejected() {
    let codecs = codecs();
    assert!(codecs.decode::<Payload>(&Value::Int(3)).is_err());

    let bad_field = Value::Map(vec![(
        Value::Str("text".into()),
        // Wrong shape for the field.
        Value::Bool(true),
    )]);
    assert!(codecs.decode::<Payload>(&bad_field).is_err());
}
