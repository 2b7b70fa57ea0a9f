#![no_main]
use flatfile::scan::PropertyScanner;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut scanner = PropertyScanner::new();
    let mut offset = 0;
    while offset < data.len() {
        let next = scanner.scan_line(data, offset);
        assert!(next > offset, "scanner did not advance at {offset}");
        let name = scanner.name_span();
        let value = scanner.value_span();
        assert!(name.begin <= name.end && name.end <= next);
        assert!(value.begin <= value.end && value.end <= next);
        offset = next;
    }
    let _ = flatfile::properties::read_bytes(data);
});
