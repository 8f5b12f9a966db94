#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsondescent::{ErrorKind, Map as DescentMap, ParserOptions, Value as DescentValue, parse_with_options};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // option flags

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r", // JSON core
    "\u{00A0}".as_bytes(),
    "\u{1680}".as_bytes(),
    "\u{2000}".as_bytes(),
    "\u{2009}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{2029}".as_bytes(),
    "\u{202F}".as_bytes(),
    "\u{3000}".as_bytes(),
    "\u{FEFF}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);

        let mut prefix = HEADER;
        while prefix < size {
            let limit = max_size - prefix;

            prefix += append_whitespace(&mut data[prefix..], limit);
            prefix += append_value(&mut data[prefix..], size, limit);
            prefix += append_whitespace(&mut data[prefix..], limit);
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 1‒N whitespace code-points to `buf`, never exceeding `limit`.
/// Returns the number of bytes written.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n_codepoints = rng.random_range(1..=limit.min(8));
        let mut written = 0;

        for _ in 0..n_codepoints {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }

            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2 + 1).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn from_serde(value: Value) -> DescentValue {
    match value {
        Value::Null => DescentValue::Null,
        Value::Bool(b) => DescentValue::Boolean(b),
        Value::Number(n) => DescentValue::Number(n.as_f64().expect("finite number")),
        Value::String(s) => DescentValue::String(s),
        Value::Array(items) => DescentValue::Array(items.into_iter().map(from_serde).collect()),
        Value::Object(members) => DescentValue::Object(
            members
                .into_iter()
                .map(|(k, v)| (k, from_serde(v)))
                .collect::<DescentMap>(),
        ),
    }
}

fn parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let Ok(input) = std::str::from_utf8(&data[HEADER..]) else {
        return;
    };

    let options = ParserOptions {
        allow_unicode_whitespace: flags & 1 != 0,
        allow_control_characters: flags & 2 != 0,
        max_depth: if flags & 4 != 0 { 8 } else { ParserOptions::default().max_depth },
    };
    let ours = parse_with_options(input, options);

    // Whatever parses must survive a render/reparse cycle unchanged.
    if let Ok(value) = &ours {
        let rendered = value.to_string();
        let reparsed = parse_with_options(&rendered, ParserOptions {
            max_depth: options.max_depth,
            ..ParserOptions::default()
        })
        .expect("rendered value must parse");
        assert_eq!(&reparsed, value);
    }

    if options != ParserOptions::default() {
        return;
    }

    let reference = serde_json::from_str::<Value>(input);
    match (ours, reference) {
        (Ok(ours), Ok(reference)) => assert_eq!(ours, from_serde(reference), "{input:?}"),
        (Err(err), Ok(_)) if err.kind() == ErrorKind::NestingTooDeep => {}
        (Ok(_), Err(err)) if err.to_string().starts_with("recursion limit exceeded") => {}
        (Err(_), Err(_)) => {}
        (ours, reference) => panic!("disagreement on {input:?}: ours={ours:?} serde_json={reference:?}"),
    }
}

fuzz_target!(|data: &[u8]| parser(data));
