//! Fixture API ("foo") used to exercise the command pipeline.
//!
//! Three command kinds cover the interesting shapes: `CmdA` carries fixed
//! flags and leaves a visible mark in state, `CmdB` computes its flags from
//! the state snapshot, and `CmdX` carries the full payload surface (string,
//! bool slice, owned record chain, device pointer, and all three map shapes)
//! together with a registered wire codec.

use retrace_data::{
    Assignable, Codec, CodecError, Codecs, RawStringMap, Record, RecordDict, StringDict, Value,
};
use retrace_mem::Pointer;

use crate::{
    Api, ApiId, Cmd, CmdFlags, CmdId, GlobalState, MutateError, Registry, RegistryBuilder,
    ReplayOp, ReplaySink,
};

pub const TEST_API_ID: ApiId = ApiId([1, 2, 3]);

/// Scratch key `CmdA` sets so later commands can observe that it ran.
pub const SCRATCH_A_RAN: &str = "cmd-a-ran";

/// Carries fixed flags and marks the state when mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdA {
    pub id: CmdId,
    pub flags: CmdFlags,
}

impl Cmd for CmdA {
    fn name(&self) -> &'static str {
        "A"
    }

    fn flags(&self, _id: CmdId, _state: &GlobalState) -> CmdFlags {
        self.flags
    }

    fn mutate(
        &mut self,
        id: CmdId,
        state: &mut GlobalState,
        sink: &mut dyn ReplaySink,
    ) -> Result<(), MutateError> {
        state.set_scratch(SCRATCH_A_RAN, 1);
        sink.emit(ReplayOp::Label(id.0));
        Ok(())
    }
}

/// Computes its flags from the state snapshot: they report whether a prior
/// command left the [`SCRATCH_A_RAN`] mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdB {
    pub id: CmdId,
    pub value: bool,
}

impl Cmd for CmdB {
    fn name(&self) -> &'static str {
        "B"
    }

    fn flags(&self, _id: CmdId, state: &GlobalState) -> CmdFlags {
        if state.scratch(SCRATCH_A_RAN).is_some() {
            CmdFlags::STATE_CHANGE
        } else {
            CmdFlags::empty()
        }
    }

    fn mutate(
        &mut self,
        _id: CmdId,
        _state: &mut GlobalState,
        _sink: &mut dyn ReplaySink,
    ) -> Result<(), MutateError> {
        Ok(())
    }
}

/// The full payload surface of `CmdX`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    pub text: String,
    pub bools: Vec<bool>,
    pub chain: Option<Record>,
    pub ptr: Pointer,
    pub map: StringDict,
    pub pmap: RecordDict,
    pub rmap: RawStringMap,
}

/// The fixture API's one registered command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdX {
    pub id: CmdId,
    pub payload: Payload,
}

impl Cmd for CmdX {
    fn name(&self) -> &'static str {
        "X"
    }

    fn api(&self) -> Option<ApiId> {
        Some(TEST_API_ID)
    }

    fn flags(&self, _id: CmdId, _state: &GlobalState) -> CmdFlags {
        CmdFlags::empty()
    }

    fn mutate(
        &mut self,
        _id: CmdId,
        state: &mut GlobalState,
        sink: &mut dyn ReplaySink,
    ) -> Result<(), MutateError> {
        if !self.payload.ptr.is_null() {
            let data = self.payload.text.as_bytes().to_vec();
            state.memory_mut().write(self.payload.ptr, &data)?;
            sink.emit(ReplayOp::Store {
                dst: self.payload.ptr,
                data,
            });
        }
        sink.emit(ReplayOp::Call { name: "X".into() });
        Ok(())
    }
}

/// The "foo" API.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestApi;

impl Api for TestApi {
    fn name(&self) -> &'static str {
        "foo"
    }

    fn id(&self) -> ApiId {
        TEST_API_ID
    }

    fn index(&self) -> u8 {
        15
    }

    fn create_cmd(&self, name: &str) -> Option<Box<dyn Cmd>> {
        match name {
            "X" => Some(Box::<CmdX>::default()),
            _ => None,
        }
    }
}

/// A registry holding only the fixture API.
pub fn registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .register(Box::new(TestApi))
        .expect("empty builder cannot collide");
    builder.build()
}

fn encode_payload(p: &Payload) -> Result<Value, CodecError> {
    let field = |name: &str, value: Value| (Value::Str(name.to_string()), value);
    Ok(Value::Map(vec![
        field("text", Value::Str(p.text.clone())),
        field("bools", Value::BoolSlice(p.bools.clone())),
        field(
            "chain",
            match &p.chain {
                Some(r) => Value::Record(r.to_value()),
                None => Value::Null,
            },
        ),
        field("ptr", Value::Pointer(p.ptr.address())),
        field("map", p.map.to_value()),
        field("pmap", p.pmap.to_value()),
        field(
            "rmap",
            Value::Map(
                p.rmap
                    .iter()
                    .map(|(k, v)| (Value::Str(k.clone()), Value::Str(v.clone())))
                    .collect(),
            ),
        ),
    ]))
}

fn decode_payload(wire: &Value) -> Result<Payload, CodecError> {
    let Value::Map(entries) = wire else {
        return Err(CodecError::Malformed("payload must be a field map"));
    };
    let mut p = Payload::default();
    for (key, value) in entries {
        let Value::Str(key) = key else {
            return Err(CodecError::Malformed("payload field keys must be strings"));
        };
        match (key.as_str(), value) {
            ("text", Value::Str(s)) => p.text = s.clone(),
            ("bools", Value::BoolSlice(b)) => p.bools = b.clone(),
            ("chain", Value::Record(r)) => p.chain = Some(Record::from_value(r)),
            ("chain", Value::Null) => p.chain = None,
            ("ptr", v) => p.ptr.try_assign(v)?,
            ("map", v) => p.map.try_assign(v)?,
            ("pmap", v) => p.pmap.try_assign(v)?,
            ("rmap", v) => p.rmap.try_assign(v)?,
            _ => return Err(CodecError::Malformed("unknown or mis-shaped payload field")),
        }
    }
    Ok(p)
}

pub fn payload_codec() -> Codec<Payload> {
    Codec {
        encode: encode_payload,
        decode: decode_payload,
    }
}

pub fn register_codecs(codecs: &mut Codecs) -> Result<(), CodecError> {
    codecs.register(payload_codec())
}

fn string_map<M: FromIterator<(String, String)>>(entries: &[(&str, &str)]) -> M {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// First sample payload: populated map, empty pmap, a two-deep record chain.
pub fn sample_p() -> Payload {
    Payload {
        text: "aaa".into(),
        bools: vec![true, false, true],
        chain: Some(Record::with_child("ccc", Record::new("ddd"))),
        ptr: Pointer::new(0x123),
        map: string_map(&[("cat", "meow"), ("dog", "woof")]),
        pmap: RecordDict::new(),
        rmap: string_map(&[("eyes", "see"), ("nose", "smells")]),
    }
}

/// Second sample payload: no record chain, populated pmap.
pub fn sample_q() -> Payload {
    let mut pmap = RecordDict::new();
    pmap.add(100, Record::new("baldrick"));
    Payload {
        text: "xyz".into(),
        bools: vec![false, true, false],
        chain: None,
        ptr: Pointer::new(0x321),
        map: string_map(&[("bird", "tweet"), ("fox", "?")]),
        pmap,
        rmap: string_map(&[("ears", "hear"), ("tongue", "taste")]),
    }
}
