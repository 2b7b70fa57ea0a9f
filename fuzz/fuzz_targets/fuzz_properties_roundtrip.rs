#![no_main]
use flatfile::properties::{self, Properties};
use flatfile::{AssignOp, LineEnding, PropertiesOptions};
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
struct Input {
    op: u8,
    spaces: bool,
    crlf: bool,
    entries: Vec<(String, String)>,
}

fuzz_target!(|input: Input| {
    let opts = PropertiesOptions {
        op: match input.op % 3 {
            0 => AssignOp::Equals,
            1 => AssignOp::Colon,
            _ => AssignOp::Space,
        },
        spaces: input.spaces,
        line_ending: if input.crlf { LineEnding::Crlf } else { LineEnding::Lf },
    };
    let props: Properties = input.entries.into_iter().filter(|(k, _)| !k.is_empty()).collect();
    let text = properties::to_string(&props, &opts);
    let back = properties::read_str(&text);
    if back != props {
        panic!("Roundtrip mismatch!\nOptions: {opts:?}\nText: {text:?}\nWritten: {props:?}\nDecoded: {back:?}");
    }
});
