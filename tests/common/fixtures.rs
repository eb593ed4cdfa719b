//! Static keyword corpora and canned API payloads used across harnesses.
//!
//! Each corpus entry is a keyword followed by its synonyms, the way a keyword
//! source hands them to `compact_query`.

/// Realistic keyword groups from mechanical and electrical patents, paired
/// with the Orbit (`+`) query each one compacts to.
pub const CORPUS_PATENT: &[(&[&str], &str)] = &[
    (
        &["rotor blade", "rotor blades", "turbine blade", "vane", "airfoil", "airfoils"],
        "rotor blade+ OR airfoil+ OR turbine blade OR vane",
    ),
    (
        &["heat exchanger", "heat exchangers", "heat sink", "radiator", "radiators", "cooling fin", "cooling fins"],
        "heat exchanger+ OR cooling fin+ OR radiator+ OR heat sink",
    ),
    (
        &["battery", "batteries", "accumulator", "accumulators", "cell", "cells", "power storage"],
        "accumulator+ OR batter+ OR cell+ OR power storage",
    ),
    (
        &["sensor", "sensors", "sensing", "detector", "detectors", "transducer"],
        "detector+ OR sensor+ OR sensing OR transducer",
    ),
    (
        &["fastener", "fasteners", "fastening", "bolt", "bolts", "screw", "screws", "rivet"],
        "fastener+ OR screw+ OR bolt+ OR fastening OR rivet",
    ),
];

/// Groups where nothing should be truncated.
pub const CORPUS_NO_STEMS: &[&[&str]] = &[
    &["cat", "dog"],
    &["ink", "toner", "pigment"],
    &["valve", "gate", "shutter"],
];

/// Inputs that collapse to nothing.
pub const CORPUS_DEGENERATE: &[&[&str]] = &[&[], &[""], &["   ", "\t", "\n"]];

/// A keyword response as the model returns it.
pub const KEYWORD_RESPONSE_JSON: &str = r#"{
  "keywords": [
    { "keyword": "wireless", "synonyms": ["wirelessly", "radio", "rf", "radio frequency"] },
    { "keyword": "connector", "synonyms": ["conn", "connect", "connection"] },
    { "keyword": "ink", "synonyms": ["toner", "pigment"] }
  ]
}"#;

/// A short patent abstract.
pub const PATENT_ABSTRACT: &str = "A wireless sensor node comprising a radio transceiver, \
an energy-harvesting battery and a connector for attaching external detectors.";

/// Wrap `text` in a Generative Language API `generateContent` response.
pub fn gemini_envelope(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 64 }
    })
}

/// Write `contents` to a fresh file inside a temp dir that lives as long as
/// the returned guard.
pub fn write_temp(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (dir, path)
}
