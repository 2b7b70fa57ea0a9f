//! Write/read round trips of properties files.

use flatfile::properties::{self, Properties};
use flatfile::{AssignOp, LineEnding, PropertiesOptions};
use proptest::prelude::*;

fn all_options() -> Vec<PropertiesOptions> {
    let mut out = Vec::new();
    for op in [AssignOp::Equals, AssignOp::Colon, AssignOp::Space] {
        for spaces in [false, true] {
            for line_ending in [LineEnding::Lf, LineEnding::Crlf] {
                out.push(PropertiesOptions { op, spaces, line_ending });
            }
        }
    }
    out
}

#[test]
fn special_characters_survive() {
    let mut props = Properties::new();
    props.insert("alice".into(), "a".into());
    props.insert("bob".into(), "".into());
    props.insert("with space".into(), " padded value ".into());
    props.insert("a=b:c".into(), "=x:y".into());
    props.insert("back\\slash\\".into(), "c:\\path\\".into());
    props.insert("#not a comment".into(), "!".into());
    props.insert("multi".into(), "line one\nline two\ttab".into());
    props.insert("unicode ä".into(), "€ 漢字".into());

    for opts in all_options() {
        let text = properties::to_string(&props, &opts);
        let back = properties::read_str(&text);
        assert_eq!(back, props, "options {opts:?}, text {text:?}");
    }
}

#[test]
fn read_keeps_file_order() {
    let text = "zeta=1\nalpha=2\nmid=3\n";
    let props = properties::read_str(text);
    let names: Vec<&str> = props.keys().map(String::as_str).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
    assert_eq!(properties::to_string(&props, &PropertiesOptions::default()), text);
}

#[test]
fn file_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let mut props = Properties::new();
    for (k, v) in [("alice", "a"), ("bob", "b"), ("clair", "c"), ("david", "d")] {
        props.insert(k.to_string(), v.to_string());
    }
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("test.properties");
    flatfile::write_properties_file(&path, &props, &PropertiesOptions::default())?;
    let back = flatfile::read_properties_file(&path)?;
    assert_eq!(back, props);
    Ok(())
}

#[test]
fn nothing_is_written_for_no_properties() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("empty.properties");
    flatfile::write_properties_file(&path, &Properties::new(), &PropertiesOptions::default())?;
    assert!(!path.exists());
    Ok(())
}

#[test]
fn reader_input_matches_bytes_input() -> Result<(), Box<dyn std::error::Error>> {
    let text = "a=1\r\nb : 2\rc 3\n";
    let from_reader = properties::read_reader(text.as_bytes())?;
    assert_eq!(from_reader, properties::read_str(text));
    assert_eq!(from_reader["c"], "3");
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any non-empty names and any values read back unchanged.
    #[test]
    fn prop_round_trip(
        entries in prop::collection::vec(
            ("[a-zA-Z0-9 =:\\\\#!\t.äé]{1,12}", "[a-zA-Z0-9 =:\\\\#!\t\r\n.€]{0,16}"),
            0..12,
        ),
        opt_index in 0usize..12,
    ) {
        let props: Properties = entries.into_iter().collect();
        let opts = &all_options()[opt_index];
        let text = properties::to_string(&props, opts);
        let back = properties::read_str(&text);
        prop_assert_eq!(back, props);
    }

    /// Text without backslashes decodes to itself.
    #[test]
    fn prop_plain_value_is_unchanged(value in "[a-zA-Z0-9=:#! ]{0,24}") {
        let value = value.trim().to_string();
        let props = properties::read_str(&format!("k={value}"));
        prop_assert_eq!(&props["k"], &value);
    }
}
