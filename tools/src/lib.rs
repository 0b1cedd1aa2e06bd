//! Inspection and debugging tools for the dispdu codec.
//!
//! Everything here renders records purely through the codec's
//! [`FieldVisitor`] reflection interface; no formatting knowledge lives
//! in the codec crates.

use record::{FieldVisitor, Scalar, VisitFields};
use serde::Serialize;
use serde_json::{Map, Value};
use wire::{DecodeError, DecodedPdu, PduRegistry, PduStream};

/// Renders a decoded PDU as an indented text tree.
#[must_use]
pub fn dump_text(decoded: &DecodedPdu) -> String {
    let mut dumper = TextDumper::default();
    dumper.push_line(&format!(
        "pdu kind={} ({}) length={} consumed={}",
        decoded.header.kind.to_int(),
        decoded.header.kind.label().unwrap_or("unknown"),
        decoded.header.length,
        decoded.consumed,
    ));
    dumper.indent += 1;
    dumper.push_line("header");
    dumper.indent += 1;
    decoded.header.visit_fields(&mut dumper);
    dumper.indent -= 1;
    dumper.push_line("body");
    dumper.indent += 1;
    decoded.body.visit_fields(&mut dumper);
    dumper.out
}

/// Renders a decoded PDU as a JSON value.
#[must_use]
pub fn dump_json(decoded: &DecodedPdu) -> Value {
    let mut header = JsonTree::new();
    decoded.header.visit_fields(&mut header);
    let mut body = JsonTree::new();
    decoded.body.visit_fields(&mut body);

    let mut root = Map::new();
    root.insert("kind".to_string(), decoded.header.kind.to_int().into());
    if let Some(label) = decoded.header.kind.label() {
        root.insert("kind_label".to_string(), label.into());
    }
    root.insert("consumed".to_string(), decoded.consumed.into());
    root.insert("header".to_string(), header.finish());
    root.insert("body".to_string(), body.finish());
    Value::Object(root)
}

/// One PDU seen while scanning a capture.
#[derive(Debug, Clone, Serialize)]
pub struct PduSummary {
    pub offset: usize,
    pub kind: u8,
    pub kind_label: Option<&'static str>,
    pub stated_length: u16,
    pub consumed: usize,
    pub length_agrees: bool,
}

/// Result of scanning a buffer of concatenated PDUs.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ScanReport {
    pub pdus: Vec<PduSummary>,
    /// PDUs with unregistered kinds, skipped via their stated length.
    pub unknown_skipped: usize,
    /// First structural error, if the scan stopped early.
    pub error: Option<String>,
    pub trailing_bytes: usize,
}

/// Walks a capture, summarizing every PDU.
///
/// Unknown kinds are skipped using the stated header length (the
/// explicit resynchronization the wire layer exposes); any other error
/// stops the scan and is reported.
#[must_use]
pub fn scan_stream(buf: &[u8], registry: &PduRegistry) -> ScanReport {
    let mut report = ScanReport::default();
    let mut stream = PduStream::new(buf, registry);

    while !stream.is_empty() {
        let offset = stream.position();
        match stream.next_pdu() {
            Some(Ok(decoded)) => report.pdus.push(PduSummary {
                offset,
                kind: decoded.header.kind.to_int(),
                kind_label: decoded.header.kind.label(),
                stated_length: decoded.header.length,
                consumed: decoded.consumed,
                length_agrees: decoded.length_agrees(),
            }),
            Some(Err(DecodeError::UnknownPduKind { header })) => {
                if stream.skip_declared(&header).is_err() {
                    report.error = Some(format!(
                        "unknown kind {} with unusable length {}",
                        header.kind.to_int(),
                        header.length
                    ));
                    break;
                }
                report.unknown_skipped += 1;
            }
            Some(Err(err)) => {
                report.error = Some(err.to_string());
                break;
            }
            None => break,
        }
    }

    report.trailing_bytes = stream.remaining();
    report
}

#[derive(Default)]
struct TextDumper {
    out: String,
    indent: usize,
}

impl TextDumper {
    fn push_line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(line);
        self.out.push('\n');
    }
}

fn scalar_to_string(value: Scalar) -> String {
    match value {
        Scalar::U8(v) => v.to_string(),
        Scalar::U16(v) => v.to_string(),
        Scalar::U32(v) => v.to_string(),
        Scalar::U64(v) => v.to_string(),
        Scalar::I8(v) => v.to_string(),
        Scalar::I16(v) => v.to_string(),
        Scalar::I32(v) => v.to_string(),
        Scalar::I64(v) => v.to_string(),
        Scalar::F32(v) => v.to_string(),
        Scalar::F64(v) => v.to_string(),
    }
}

impl FieldVisitor for TextDumper {
    fn scalar(&mut self, name: &str, value: Scalar) {
        self.push_line(&format!("{name}: {}", scalar_to_string(value)));
    }

    fn bytes(&mut self, name: &str, value: &[u8]) {
        let hex: String = value.iter().map(|byte| format!("{byte:02x}")).collect();
        self.push_line(&format!("{name}: 0x{hex}"));
    }

    fn begin_record(&mut self, name: &str) {
        self.push_line(name);
        self.indent += 1;
    }

    fn end_record(&mut self) {
        self.indent -= 1;
    }

    fn begin_list(&mut self, name: &str, len: usize) {
        self.push_line(&format!("{name} ({len})"));
        self.indent += 1;
    }

    fn end_list(&mut self) {
        self.indent -= 1;
    }
}

fn scalar_to_value(value: Scalar) -> Value {
    match value {
        Scalar::U8(v) => v.into(),
        Scalar::U16(v) => v.into(),
        Scalar::U32(v) => v.into(),
        Scalar::U64(v) => v.into(),
        Scalar::I8(v) => v.into(),
        Scalar::I16(v) => v.into(),
        Scalar::I32(v) => v.into(),
        Scalar::I64(v) => v.into(),
        Scalar::F32(v) => serde_json::Number::from_f64(f64::from(v))
            .map_or(Value::Null, Value::Number),
        Scalar::F64(v) => serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number),
    }
}

enum Frame {
    Record(Map<String, Value>),
    List(Vec<Value>),
}

/// Builds a `serde_json::Value` tree from visitor callbacks.
struct JsonTree {
    stack: Vec<(String, Frame)>,
}

impl JsonTree {
    fn new() -> Self {
        Self {
            stack: vec![(String::new(), Frame::Record(Map::new()))],
        }
    }

    fn insert(&mut self, name: &str, value: Value) {
        match &mut self.stack.last_mut().expect("visitor stack underflow").1 {
            Frame::Record(map) => {
                map.insert(name.to_string(), value);
            }
            Frame::List(items) => items.push(value),
        }
    }

    fn close(&mut self) {
        let (name, frame) = self.stack.pop().expect("visitor stack underflow");
        let value = match frame {
            Frame::Record(map) => Value::Object(map),
            Frame::List(items) => Value::Array(items),
        };
        self.insert(&name, value);
    }

    fn finish(mut self) -> Value {
        let (_, frame) = self.stack.pop().expect("visitor stack underflow");
        match frame {
            Frame::Record(map) => Value::Object(map),
            Frame::List(items) => Value::Array(items),
        }
    }
}

impl FieldVisitor for JsonTree {
    fn scalar(&mut self, name: &str, value: Scalar) {
        self.insert(name, scalar_to_value(value));
    }

    fn bytes(&mut self, name: &str, value: &[u8]) {
        let hex: String = value.iter().map(|byte| format!("{byte:02x}")).collect();
        self.insert(name, hex.into());
    }

    fn begin_record(&mut self, name: &str) {
        self.stack.push((name.to_string(), Frame::Record(Map::new())));
    }

    fn end_record(&mut self) {
        self.close();
    }

    fn begin_list(&mut self, name: &str, _len: usize) {
        self.stack.push((name.to_string(), Frame::List(Vec::new())));
    }

    fn end_list(&mut self) {
        self.close();
    }
}
