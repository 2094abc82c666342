//! Reference families for the conformance suite.
//!
//! Each family is a complete `TestableFamily` implementation that the
//! suite runs against itself, and doubles as a worked example of wiring a
//! discriminator.

use discern_core::{Discriminator, ResolveError, Variant};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::traits::{Canonical, TestableFamily};

// ── Kind: "kind" → a{x} | b{y} ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindA {
    pub x: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindB {
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KindValue {
    A(KindA),
    B(KindB),
}

impl From<KindA> for KindValue {
    fn from(a: KindA) -> Self {
        KindValue::A(a)
    }
}

impl From<KindB> for KindValue {
    fn from(b: KindB) -> Self {
        KindValue::B(b)
    }
}

#[derive(Debug, Deserialize)]
pub struct KindTag {
    #[serde(default)]
    pub kind: String,
}

impl Discriminator<KindValue> for KindTag {
    fn resolve(&self) -> Result<Variant<KindValue>, ResolveError> {
        match self.kind.as_str() {
            "a" => Ok(Variant::of::<KindA>().named("a")),
            "b" => Ok(Variant::of::<KindB>().named("b")),
            other => Err(ResolveError::unknown(other, &["a", "b"])),
        }
    }
}

/// The two-variant family keyed on `"kind"`.
pub struct KindFamily;

impl TestableFamily for KindFamily {
    type Value = KindValue;
    type Discriminator = KindTag;

    fn tag_field(&self) -> &'static str {
        "kind"
    }

    fn canonical(&self) -> Vec<Canonical<KindValue>> {
        vec![
            Canonical {
                document: json!({"kind": "a", "x": 5}),
                expected: KindValue::A(KindA { x: 5 }),
            },
            Canonical {
                document: json!({"kind": "b", "y": 7}),
                expected: KindValue::B(KindB { y: 7 }),
            },
        ]
    }

    fn unknown_tag(&self) -> Value {
        json!("c")
    }

    fn zero_tag(&self) -> Value {
        json!("")
    }
}

// ── Event: "type" with a default variant for the empty tag ──────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ping {
    #[serde(default)]
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub from: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Ping(Ping),
    Message(Message),
}

impl From<Ping> for Event {
    fn from(p: Ping) -> Self {
        Event::Ping(p)
    }
}

impl From<Message> for Event {
    fn from(m: Message) -> Self {
        Event::Message(m)
    }
}

#[derive(Debug, Deserialize)]
pub struct EventTag {
    #[serde(rename = "type", default)]
    pub ty: String,
}

impl Discriminator<Event> for EventTag {
    fn resolve(&self) -> Result<Variant<Event>, ResolveError> {
        match self.ty.as_str() {
            // Untyped events are keep-alives.
            "" | "ping" => Ok(Variant::of::<Ping>().named("ping")),
            "message" => Ok(Variant::of::<Message>().named("message")),
            other => Err(ResolveError::unknown(other, &["ping", "message"])),
        }
    }
}

/// A family keyed on `"type"` whose empty tag selects the `ping` variant.
pub struct EventFamily;

impl TestableFamily for EventFamily {
    type Value = Event;
    type Discriminator = EventTag;

    fn tag_field(&self) -> &'static str {
        "type"
    }

    fn canonical(&self) -> Vec<Canonical<Event>> {
        vec![
            Canonical {
                document: json!({"type": "ping", "seq": 42}),
                expected: Event::Ping(Ping { seq: 42 }),
            },
            Canonical {
                document: json!({
                    "type": "message",
                    "from": "ops",
                    "text": "deploy finished",
                    "tags": ["release"]
                }),
                expected: Event::Message(Message {
                    from: "ops".to_string(),
                    text: "deploy finished".to_string(),
                    tags: vec!["release".to_string()],
                }),
            },
        ]
    }

    fn unknown_tag(&self) -> Value {
        json!("presence")
    }

    fn zero_tag(&self) -> Value {
        json!("")
    }
}

// ── Opcode: numeric tag "op" ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Push {
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pop {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Jump {
    pub target: u32,
    #[serde(default)]
    pub conditional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Push(Push),
    Pop(Pop),
    Jump(Jump),
}

impl From<Push> for Instruction {
    fn from(p: Push) -> Self {
        Instruction::Push(p)
    }
}

impl From<Pop> for Instruction {
    fn from(p: Pop) -> Self {
        Instruction::Pop(p)
    }
}

impl From<Jump> for Instruction {
    fn from(j: Jump) -> Self {
        Instruction::Jump(j)
    }
}

#[derive(Debug, Deserialize)]
pub struct OpTag {
    #[serde(default)]
    pub op: u8,
}

impl Discriminator<Instruction> for OpTag {
    fn resolve(&self) -> Result<Variant<Instruction>, ResolveError> {
        match self.op {
            1 => Ok(Variant::of::<Push>().named("push")),
            2 => Ok(Variant::of::<Pop>().named("pop")),
            3 => Ok(Variant::of::<Jump>().named("jump")),
            other => Err(ResolveError::unknown(other.to_string(), &[])),
        }
    }
}

/// A family keyed on the numeric opcode `"op"`.
pub struct OpcodeFamily;

impl TestableFamily for OpcodeFamily {
    type Value = Instruction;
    type Discriminator = OpTag;

    fn tag_field(&self) -> &'static str {
        "op"
    }

    fn canonical(&self) -> Vec<Canonical<Instruction>> {
        vec![
            Canonical {
                document: json!({"op": 1, "value": -3}),
                expected: Instruction::Push(Push { value: -3 }),
            },
            Canonical {
                document: json!({"op": 2}),
                expected: Instruction::Pop(Pop {}),
            },
            Canonical {
                document: json!({"op": 3, "target": 12, "conditional": true}),
                expected: Instruction::Jump(Jump {
                    target: 12,
                    conditional: true,
                }),
            },
        ]
    }

    fn unknown_tag(&self) -> Value {
        json!(200)
    }

    fn zero_tag(&self) -> Value {
        json!(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discern_core::Discriminated;

    #[test]
    fn test_event_without_type_is_ping() {
        let e = Discriminated::<Event, EventTag>::from_value(&json!({"seq": 3})).unwrap();
        assert_eq!(e.value, Event::Ping(Ping { seq: 3 }));
    }

    #[test]
    fn test_opcode_unknown_reports_number() {
        let err = Discriminated::<Instruction, OpTag>::from_value(&json!({"op": 9})).unwrap_err();
        assert_eq!(err.to_string(), r#"unknown discriminator "9""#);
    }

    #[test]
    fn test_opcode_out_of_range_is_malformed() {
        let err =
            Discriminated::<Instruction, OpTag>::from_value(&json!({"op": 900})).unwrap_err();
        assert_eq!(err.phase(), discern_core::Phase::Discriminator);
    }
}
