use std::fs;

use sales_ingest::{read_sales_table, write_sales_table};
use sales_model::{Table, Value};

#[test]
fn reads_raw_headers_and_cells() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("raw.csv");
    fs::write(
        &path,
        " ProdName , CATEGORY ,price\n standing desk ,Office,150\n",
    )
    .expect("write file");

    let table = read_sales_table(&path).expect("read csv");
    // nothing is trimmed at ingest time
    assert_eq!(table.columns, vec![" ProdName ", " CATEGORY ", "price"]);
    assert_eq!(
        table.rows[0],
        vec![
            Value::Text(" standing desk ".to_string()),
            Value::Text("Office".to_string()),
            Value::Text("150".to_string()),
        ]
    );
}

#[test]
fn empty_cells_become_missing_and_short_rows_are_padded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("raw.csv");
    fs::write(&path, "a,b,c\n1,,3\n4\n").expect("write file");

    let table = read_sales_table(&path).expect("read csv");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][1], Value::Missing);
    assert_eq!(table.rows[1][1], Value::Missing);
    assert_eq!(table.rows[1][2], Value::Missing);
}

#[test]
fn skips_blank_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("raw.csv");
    fs::write(&path, "a,b\n1,2\n,\n3,4\n").expect("write file");

    let table = read_sales_table(&path).expect("read csv");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1][0], Value::Text("3".to_string()));
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.csv");
    let error = read_sales_table(&path).expect_err("missing file must fail");
    assert!(error.to_string().contains("read csv"));
}

#[test]
fn writes_header_and_renders_missing_as_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("clean.csv");

    let mut table = Table::new(vec![
        "prodname".to_string(),
        "price".to_string(),
        "qty".to_string(),
    ]);
    table.push_row(vec![
        Value::Text("Standing Desk".to_string()),
        Value::Number(150.0),
        Value::Integer(2),
    ]);
    table.push_row(vec![
        Value::Text("Pen Set".to_string()),
        Value::Missing,
        Value::Integer(1),
    ]);

    write_sales_table(&path, &table).expect("write csv");
    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(written, "prodname,price,qty\nStanding Desk,150,2\nPen Set,,1\n");
}

#[test]
fn missing_output_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("no-such-dir").join("clean.csv");
    let table = Table::new(vec!["a".to_string()]);
    let error = write_sales_table(&path, &table).expect_err("missing directory must fail");
    assert!(error.to_string().contains("write csv"));
}
