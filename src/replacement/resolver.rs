use super::misses::MissTracker;
use crate::reference::loader::ReferenceTable;
use serde_json::Value;
use std::collections::HashMap;

/// Looks up Hindi equivalents of English slot values in one domain's
/// reference table. Shared and read-only; every failed lookup is recorded
/// on the tracker passed by the caller.
pub struct Resolver<'a> {
    table: &'a ReferenceTable,
    aliases: &'a HashMap<String, String>,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a ReferenceTable, aliases: &'a HashMap<String, String>) -> Self {
        Resolver { table, aliases }
    }

    /// Finds the Hindi counterpart of `english_value` under `column`.
    ///
    /// `Ok(Some(hindi))` on a hit; `Ok(None)` when the column or value is
    /// not in the table, with the miss recorded (the caller keeps the
    /// original value). `Err` only for a broken table: an English row
    /// whose id has no Hindi-side counterpart. That is never treated as a
    /// plain miss.
    pub fn hindi_value(
        &self,
        misses: &mut MissTracker,
        column: &str,
        english_value: &Value,
    ) -> Result<Option<String>, String> {
        // The aliased name is what gets looked up and what lands in the
        // miss report.
        let column = self.aliases.get(column).map(String::as_str).unwrap_or(column);

        if !self.table.english.has_column(column) {
            misses.record(column);
            return Ok(None);
        }

        let needle = value_text(english_value);
        let english_row = match self.table.english.find_containing(column, &needle) {
            Some(row) => row,
            None => {
                misses.record(&format!("{} - {}", column, needle));
                return Ok(None);
            }
        };

        // First Hindi row with the shared id wins.
        let hindi_row = self.table.hindi.find_by_id(english_row.id).ok_or_else(|| {
            format!(
                "reference table integrity: english row id {} (column '{}', value '{}') has no hindi row",
                english_row.id, column, needle
            )
        })?;
        let hindi = hindi_row.cells.get(column).ok_or_else(|| {
            format!(
                "reference table integrity: hindi row id {} has no column '{}'",
                english_row.id, column
            )
        })?;
        Ok(Some(hindi.clone()))
    }
}

/// Values are compared as text: strings use their content, anything else
/// its JSON rendering.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
