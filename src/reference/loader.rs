use super::table::SheetTable;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

/// The bilingual lookup structure for one domain: two sheets aligned by
/// their `id` column.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    pub english: SheetTable,
    pub hindi: SheetTable,
}

/// Loads every domain's sheet pair from the workbook. English sheets are
/// discovered by name (`english-<domain>-original`) and each must have a
/// `hindi-<domain>-original` counterpart. No column reconciliation happens
/// here; a column present on one side only surfaces later as a lookup miss.
pub fn load_reference_tables(path: &Path) -> Result<HashMap<String, ReferenceTable>, String> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| format!("Failed to open workbook {:?}: {}", path, e))?;
    let sheet_names = workbook.sheet_names().to_owned();

    let english_sheet = Regex::new(r"^english-(.+)-original$").unwrap();
    let mut tables = HashMap::new();

    for sheet_name in &sheet_names {
        let domain = match english_sheet.captures(sheet_name) {
            Some(caps) => caps[1].to_string(),
            None => continue,
        };
        let hindi_name = format!("hindi-{}-original", domain);
        if !sheet_names.iter().any(|name| name == &hindi_name) {
            return Err(format!(
                "Workbook {:?} has sheet '{}' but no paired '{}'.",
                path, sheet_name, hindi_name
            ));
        }

        let english = read_sheet(&mut workbook, sheet_name)?;
        let hindi = read_sheet(&mut workbook, &hindi_name)?;
        tables.insert(domain, ReferenceTable { english, hindi });
    }

    if tables.is_empty() {
        return Err(format!(
            "Workbook {:?} has no english-*-original sheets.",
            path
        ));
    }
    Ok(tables)
}

fn read_sheet(workbook: &mut Xlsx<std::io::BufReader<std::fs::File>>, name: &str) -> Result<SheetTable, String> {
    let range = workbook
        .worksheet_range(name)
        .map_err(|e| format!("Failed to read sheet '{}': {}", name, e))?;
    let grid = grid_from_range(&range);
    SheetTable::from_grid(&grid).map_err(|e| format!("Sheet '{}': {}", name, e))
}

fn grid_from_range(range: &Range<Data>) -> Vec<Vec<String>> {
    range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect()
}

// Numeric cells are stringified; integral floats drop the trailing ".0"
// so ids and counts read the way the sheet shows them.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
