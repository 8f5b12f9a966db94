#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

pub const DOCUMENT: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null,
        "score": 2.5e-1
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": 2,
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")",
        "tab\there",
        "café 🦀"
    ],
    "entities": [
        {
            "type": "function",
            "name": "main"
        },
        {
            "type": "macro",
            "name": "println"
        }
    ],
    "matrix": [
        [
            -1,
            1.5
        ],
        []
    ],
    "mixed": [
        "s",
        {
            "k": "v"
        },
        true,
        [
            false
        ],
        "end"
    ],
    "empty": {}
}
"#;

/// `DOCUMENT` as rendered by `Value`'s compact `Display`.
#[rustfmt::skip]
pub const COMPACT: &str = concat!(
    r#"{"moderation":{"decision":"allow","reason":null,"score":0.25},"#,
    r#""request":{"filename":"example.rs","language":"rust","options":{"opt_level":2,"features":["serde","tokio"]}},"#,
    r#""snippets":["fn main() {}","println!(\"hi\")","tab\there","café 🦀"],"#,
    r#""entities":[{"type":"function","name":"main"},{"type":"macro","name":"println"}],"#,
    r#""matrix":[[-1,1.5],[]],"#,
    r#""mixed":["s",{"k":"v"},true,[false],"end"],"#,
    r#""empty":{}}"#,
);

#[test]
fn compact_form_matches_serde_json() {
    let value: serde_json::Value = serde_json::from_str(DOCUMENT).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(COMPACT).unwrap();
    assert_eq!(value, reparsed);
}
