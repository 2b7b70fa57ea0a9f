use flatfile::{Csv, CsvOptions, LineEnding};

fn read(header: &[&str], input: &str) -> Csv {
    let mut csv = Csv::new(header.iter().copied(), ";");
    csv.read_str(input);
    csv
}

fn rows(csv: &Csv) -> Vec<Vec<&str>> {
    (0..csv.len()).filter_map(|r| csv.row(r)).collect()
}

#[test]
fn header_in_declared_order() {
    let csv = read(&["alice", "bob"], "alice;bob\n1001;1002\n2001;2002\n");
    assert_eq!(rows(&csv), vec![vec!["1001", "1002"], vec!["2001", "2002"]]);
    assert_eq!(csv.line_numbers(), &[2, 3]);
}

#[test]
fn header_reordered_in_file() {
    let csv = read(&["alice", "bob"], "bob;alice\n1002;1001\n2002;2001\n");
    assert_eq!(rows(&csv), vec![vec!["1001", "1002"], vec!["2001", "2002"]]);
    assert_eq!(csv.line_numbers(), &[2, 3]);
}

#[test]
fn leading_and_interior_blank_lines() {
    let csv = read(&["alice", "bob"], "\n\nalice;bob\n;\n1001;1002\n  \t\n2001;2002\n\n");
    assert_eq!(rows(&csv), vec![vec!["1001", "1002"], vec!["2001", "2002"]]);
    assert_eq!(csv.line_numbers(), &[5, 7]);
}

#[test]
fn missing_column_reads_empty() {
    let csv = read(&["alice", "bob", "clair"], "bob;alice\n1002;1001\n2002;2001\n");
    assert_eq!(rows(&csv), vec![vec!["1001", "1002", ""], vec!["2001", "2002", ""]]);
}

#[test]
fn unknown_header_keeps_first_line_as_data() {
    let csv = read(&["a", "b", "c"], "1;2\n3;4;5\n");
    assert_eq!(rows(&csv), vec![vec!["1", "2", ""], vec!["3", "4", ""]]);
    assert_eq!(csv.line_numbers(), &[1, 2]);
}

#[test]
fn header_permutations_read_the_same() {
    let expected = vec![vec!["1", "2", "3"], vec!["4", "5", "6"]];
    let orders: [[usize; 3]; 6] = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    let names = ["a", "b", "c"];
    for order in orders {
        let line = |vals: [&str; 3]| order.map(|i| vals[i]).join(";");
        let input = format!(
            "{}\n{}\n{}\n",
            line(names),
            line(["1", "2", "3"]),
            line(["4", "5", "6"])
        );
        let csv = read(&names, &input);
        assert_eq!(rows(&csv), expected, "order {order:?}");
    }
}

#[test]
fn line_endings_do_not_change_fields() {
    let lf = "alice;bob\n 1 ; 2 \n\n3;4\n";
    let crlf = lf.replace('\n', "\r\n");
    let cr = lf.replace('\n', "\r");
    let a = read(&["alice", "bob"], lf);
    let b = read(&["alice", "bob"], &crlf);
    let c = read(&["alice", "bob"], &cr);
    assert_eq!(rows(&a), rows(&b));
    assert_eq!(rows(&a), rows(&c));
    assert_eq!(a.line_numbers(), b.line_numbers());
    assert_eq!(a.line_numbers(), c.line_numbers());
}

#[test]
fn mixed_line_endings_in_one_buffer() {
    let csv = read(&["x"], "x\r\n1\n2\r3\r\n");
    assert_eq!(rows(&csv), vec![vec!["1"], vec!["2"], vec!["3"]]);
    assert_eq!(csv.line_numbers(), &[2, 3, 4]);
}

#[test]
fn non_ascii_fields_are_not_trimmed() {
    let csv = read(&["name"], "name\n  Ärger \n");
    assert_eq!(csv.value(0, 0), Some("Ärger"));
}

#[test]
fn write_then_read() -> Result<(), Box<dyn std::error::Error>> {
    let mut csv = Csv::new(["id", "label"], "||");
    csv.append(&["1", "one"]);
    csv.append(&["2"]);
    let opts = CsvOptions {
        include_header: true,
        line_ending: LineEnding::Crlf,
    };

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("table.csv");
    csv.write_file(&path, &opts)?;

    let back = flatfile::read_csv_file(&path, ["label", "id"], "||")?;
    assert_eq!(back.row(0), Some(vec!["one", "1"]));
    assert_eq!(back.row(1), Some(vec!["", "2"]));
    assert_eq!(back.line_numbers(), &[2, 3]);
    Ok(())
}

#[test]
fn reading_a_missing_file_is_an_io_error() {
    let mut csv = Csv::new(["a"], ",");
    let err = csv.read_file("/no/such/dir/file.csv").unwrap_err();
    assert!(matches!(err, flatfile::Error::Io(_)));
}
