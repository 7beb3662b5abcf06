use crate::replacement::misses::MissTracker;
use crate::types::dialogue::DialogueRecord;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads one dialogue JSON file.
pub fn load_dialogue_record(file_path: &Path) -> Result<DialogueRecord, String> {
    let file = File::open(file_path)
        .map_err(|e| format!("Failed to open dialogue file {:?}: {}", file_path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| format!("Failed to parse dialogue file {:?}: {}", file_path, e))
}

/// Writes one localized dialogue record, pretty-printed.
pub fn save_dialogue_record(
    record: &DialogueRecord,
    file_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file {:?}: {}", file_path, e))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, record)
        .map_err(|e| format!("Failed to serialize record to {:?}: {}", file_path, e))?;
    Ok(())
}

/// Writes the aggregate miss report, once, after all records.
pub fn save_miss_report(misses: &MissTracker, file_path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create miss report file {:?}: {}", file_path, e))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, misses)
        .map_err(|e| format!("Failed to serialize miss report to {:?}: {}", file_path, e))?;
    Ok(())
}
