#![no_main]
use flatfile::Csv;
use flatfile::scan::FieldScanner;
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
struct Input {
    separator: String,
    header: Vec<String>,
    body: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let mut scanner = FieldScanner::new();
    let mut offset = 0;
    while offset < input.body.len() {
        let next = scanner.scan_line(&input.body, input.separator.as_bytes(), offset);
        assert!(next > offset, "scanner did not advance at {offset}");
        for (begin, end) in scanner.spans() {
            assert!(offset <= begin && begin <= end && end <= next);
        }
        offset = next;
    }

    let mut csv = Csv::new(input.header.iter().map(String::as_str), input.separator.as_str());
    csv.read_bytes(&input.body);
    for row in 0..csv.len() {
        let values = csv.row(row).expect("row in range");
        assert_eq!(values.len(), input.header.len());
    }
});
