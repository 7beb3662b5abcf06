use hindiweave::reference::table::SheetTable;

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[test]
fn empty_rows_and_columns_are_dropped() {
    let table = SheetTable::from_grid(&grid(&[
        &["id", "area", "notes", "type"],
        &["1", "north", "", "museum"],
        &["", "", "", ""],
        &["2", "south", "", "park"],
    ]))
    .unwrap();

    assert_eq!(table.columns, vec!["id", "area", "type"]);
    assert_eq!(table.rows.len(), 2, "the all-empty row must be dropped");
    assert!(!table.has_column("notes"), "the all-empty column must be dropped");
}

#[test]
fn id_column_is_required() {
    let result = SheetTable::from_grid(&grid(&[
        &["area", "type"],
        &["north", "museum"],
    ]));
    assert!(result.is_err());
}

#[test]
fn float_ids_parse_as_integers() {
    let table = SheetTable::from_grid(&grid(&[
        &["id", "area"],
        &["7.0", "centre"],
    ]))
    .unwrap();
    assert_eq!(table.rows[0].id, 7);
}

#[test]
fn non_numeric_id_is_an_error() {
    let result = SheetTable::from_grid(&grid(&[
        &["id", "area"],
        &["seven", "centre"],
    ]));
    assert!(result.is_err());
}

#[test]
fn containment_is_case_sensitive_substring() {
    let table = SheetTable::from_grid(&grid(&[
        &["id", "name"],
        &["1", "the cambridge punter"],
        &["2", "cambridge arts theatre"],
    ]))
    .unwrap();

    let row = table.find_containing("name", "punter").unwrap();
    assert_eq!(row.id, 1, "containment must match inside a longer cell");
    assert!(
        table.find_containing("name", "Punter").is_none(),
        "matching is case-sensitive"
    );
    assert!(table.find_containing("name", "aquarium").is_none());
}

#[test]
fn find_by_id_returns_first_match() {
    let table = SheetTable::from_grid(&grid(&[
        &["id", "area"],
        &["3", "first"],
        &["3", "second"],
    ]))
    .unwrap();
    assert_eq!(table.find_by_id(3).unwrap().cells["area"], "first");
    assert!(table.find_by_id(99).is_none());
}
