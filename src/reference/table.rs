use std::collections::HashMap;

pub const ID_COLUMN: &str = "id";

/// One data row of a reference sheet. `cells` holds every kept column,
/// including the textual form of the id cell.
#[derive(Debug, Clone, Default)]
pub struct SheetRow {
    pub id: i64,
    pub cells: HashMap<String, String>,
}

/// One sheet of the reference workbook, reduced to named text columns.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub columns: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl SheetTable {
    /// Builds a table from a raw text grid: the first row names the
    /// columns, the rest are data. Rows whose cells are all empty and
    /// columns whose data cells are all empty are dropped, each
    /// independently of the other. An `id` column must survive, and every
    /// kept row's id cell must parse as an integer.
    pub fn from_grid(grid: &[Vec<String>]) -> Result<Self, String> {
        let (header, data) = match grid.split_first() {
            Some(split) => split,
            None => return Err("sheet has no header row".to_string()),
        };

        // A column is kept if any data cell in it is non-empty.
        let mut kept: Vec<usize> = Vec::new();
        for (col_index, name) in header.iter().enumerate() {
            let has_value = data
                .iter()
                .any(|row| row.get(col_index).map_or(false, |cell| !cell.is_empty()));
            if has_value && !name.is_empty() {
                kept.push(col_index);
            }
        }

        let columns: Vec<String> = kept.iter().map(|&i| header[i].clone()).collect();
        let id_index = match columns.iter().position(|name| name == ID_COLUMN) {
            Some(position) => kept[position],
            None => return Err(format!("sheet has no '{}' column", ID_COLUMN)),
        };

        let mut rows = Vec::new();
        for row in data {
            if row.iter().all(|cell| cell.is_empty()) {
                continue;
            }
            let id_text = row.get(id_index).map(String::as_str).unwrap_or("");
            let id = parse_row_id(id_text)?;
            let mut cells = HashMap::with_capacity(kept.len());
            for (&col_index, name) in kept.iter().zip(&columns) {
                let cell = row.get(col_index).cloned().unwrap_or_default();
                cells.insert(name.clone(), cell);
            }
            rows.push(SheetRow { id, cells });
        }

        Ok(SheetTable { columns, rows })
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// First row whose cell in `column` contains `needle` as a substring.
    /// Case-sensitive; containment, not equality.
    pub fn find_containing(&self, column: &str, needle: &str) -> Option<&SheetRow> {
        self.rows
            .iter()
            .find(|row| row.cells.get(column).map_or(false, |cell| cell.contains(needle)))
    }

    /// First row carrying `id`.
    pub fn find_by_id(&self, id: i64) -> Option<&SheetRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

// Spreadsheet id cells often come through as floats ("7.0"), so parse via
// f64 and require an integral value.
fn parse_row_id(text: &str) -> Result<i64, String> {
    let parsed: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("row id '{}' is not numeric", text))?;
    if parsed.fract() != 0.0 {
        return Err(format!("row id '{}' is not an integer", text));
    }
    Ok(parsed as i64)
}
