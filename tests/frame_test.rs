use rollrs::error::Error;
use rollrs::{Cell, DataFrame, Series};

fn series_of(cells: Vec<Cell>, name: &str) -> Series<Cell> {
    Series::new(cells, Some(name.to_string())).unwrap()
}

#[test]
fn test_add_column_and_lookup() {
    let mut df = DataFrame::new();
    assert_eq!(df.row_count(), 0);

    df.add_column(
        "a".to_string(),
        series_of(vec![Cell::Int(1), Cell::Int(2)], "a"),
    )
    .unwrap();
    df.add_column(
        "b".to_string(),
        series_of(vec![Cell::from("x"), Cell::from("y")], "b"),
    )
    .unwrap();

    assert_eq!(df.row_count(), 2);
    assert_eq!(df.column_count(), 2);
    assert_eq!(df.column_names(), &["a", "b"]);
    assert!(df.contains_column("a"));
    assert!(!df.contains_column("c"));
    assert_eq!(*df.get("b", 1).unwrap(), Cell::from("y"));
}

#[test]
fn test_duplicate_column_rejected() {
    let mut df = DataFrame::new();
    df.add_column("a".to_string(), series_of(vec![Cell::Int(1)], "a"))
        .unwrap();
    let err = df.add_column("a".to_string(), series_of(vec![Cell::Int(2)], "a"));
    assert!(matches!(err, Err(Error::DuplicateColumnName(_))));
}

#[test]
fn test_length_mismatch_rejected() {
    let mut df = DataFrame::new();
    df.add_column(
        "a".to_string(),
        series_of(vec![Cell::Int(1), Cell::Int(2)], "a"),
    )
    .unwrap();
    let err = df.add_column("b".to_string(), series_of(vec![Cell::Int(3)], "b"));
    assert!(matches!(err, Err(Error::LengthMismatch { .. })));
}

#[test]
fn test_missing_column_and_row() {
    let mut df = DataFrame::new();
    df.add_column("a".to_string(), series_of(vec![Cell::Int(1)], "a"))
        .unwrap();
    assert!(matches!(df.column("zzz"), Err(Error::ColumnNotFound(_))));
    assert!(matches!(
        df.get("a", 9),
        Err(Error::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        df.set("a", 9, Cell::Int(0)),
        Err(Error::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_select_columns_preserves_requested_order() {
    let df = DataFrame::from_columns(vec![
        ("a".to_string(), vec![Cell::Int(1)]),
        ("b".to_string(), vec![Cell::Int(2)]),
        ("c".to_string(), vec![Cell::Int(3)]),
    ])
    .unwrap();

    let selected = df.select_columns(&["c", "a"]).unwrap();
    assert_eq!(selected.column_names(), &["c", "a"]);
    assert_eq!(*selected.get("c", 0).unwrap(), Cell::Int(3));

    assert!(matches!(
        df.select_columns(&["nope"]),
        Err(Error::ColumnNotFound(_))
    ));
}

#[test]
fn test_set_does_not_affect_clones() {
    let df = DataFrame::from_columns(vec![("a".to_string(), vec![Cell::Int(1)])]).unwrap();
    let mut copy = df.clone();
    copy.set("a", 0, Cell::blank()).unwrap();
    assert_eq!(*df.get("a", 0).unwrap(), Cell::Int(1));
    assert_eq!(*copy.get("a", 0).unwrap(), Cell::blank());
}

#[test]
fn test_row_extraction() {
    let df = DataFrame::from_columns(vec![
        ("a".to_string(), vec![Cell::Int(1), Cell::Int(2)]),
        ("b".to_string(), vec![Cell::Empty, Cell::from("y")]),
    ])
    .unwrap();
    assert_eq!(df.row(0).unwrap(), vec![Cell::Int(1), Cell::Empty]);
    assert_eq!(df.row(1).unwrap(), vec![Cell::Int(2), Cell::from("y")]);
    assert!(df.row(2).is_err());
}

#[test]
fn test_cell_field_round_trip() {
    assert_eq!(Cell::from_field(""), Cell::Empty);
    assert_eq!(Cell::from_field("42"), Cell::Int(42));
    assert_eq!(Cell::from_field("2.5"), Cell::Float(2.5));
    assert_eq!(Cell::from_field("true"), Cell::Bool(true));
    assert_eq!(Cell::from_field("hello"), Cell::from("hello"));

    assert_eq!(Cell::Empty.to_field(), "");
    assert_eq!(Cell::blank().to_field(), "");
    assert_eq!(Cell::Int(42).to_field(), "42");
}

#[test]
fn test_cell_display_marks_missing() {
    assert_eq!(Cell::Empty.to_string(), "NA");
    assert_eq!(Cell::Int(7).to_string(), "7");
    assert_eq!(Cell::from("x").to_string(), "x");
}
