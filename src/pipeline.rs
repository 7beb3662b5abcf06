use crate::config::Config;
use crate::dataset_io;
use crate::reference::loader::load_reference_tables;
use crate::replacement::misses::MissTracker;
use crate::replacement::resolver::Resolver;
use crate::replacement::transformer::{localize_record, DomainLocalizer, LocalizeError};
use crate::types::dialogue::DialogueRecord;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Sentinel file in the dataset directory that is never a dialogue.
const DATASET_LISTING: &str = "list.json";

pub fn run_localization(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("Starting localization run...");

    // Creating an existing output directory is a no-op.
    let output_root = PathBuf::from(&config.output_root);
    fs::create_dir_all(&output_root)
        .map_err(|e| format!("Failed to create output directory {:?}: {}", output_root, e))?;

    let tables = load_reference_tables(Path::new(&config.database_workbook))?;
    let mut localizers = Vec::with_capacity(config.domains.len());
    for spec in &config.domains {
        let table = tables.get(&spec.goal_key).ok_or_else(|| {
            format!(
                "Workbook has no sheets for domain '{}' (expected 'english-{}-original' and 'hindi-{}-original').",
                spec.goal_key, spec.goal_key, spec.goal_key
            )
        })?;
        localizers.push(DomainLocalizer {
            spec,
            resolver: Resolver::new(table, &config.aliases),
        });
    }

    let dialogue_files = scan_dataset_directory(Path::new(&config.dataset_dir))?;
    println!(
        "Replacing user dialogue act values with Hindi ({} file(s) from {})...",
        dialogue_files.len(),
        config.dataset_dir
    );

    let mut misses = MissTracker::new();
    let mut written = 0usize;
    let mut skipped = 0usize;

    for file_path in &dialogue_files {
        let file_name = file_path.file_name().unwrap_or_default().to_string_lossy();
        match localize_file(file_path, &localizers, &mut misses) {
            Ok(record) => {
                let output_path = output_root.join(&*file_name);
                dataset_io::save_dialogue_record(&record, &output_path)?;
                written += 1;
            }
            Err(LocalizeError::TableIntegrity(msg)) => {
                return Err(format!("Aborting run, reference table is broken: {}", msg).into());
            }
            Err(LocalizeError::Record(msg)) => {
                if config.continue_on_record_error {
                    eprintln!("  ERROR: {}: {}. Skipping this file.", file_name, msg);
                    skipped += 1;
                } else {
                    return Err(format!("{}: {}", file_name, msg).into());
                }
            }
        }
    }

    let report_path = output_root.join(&config.miss_report);
    dataset_io::save_miss_report(&misses, &report_path)?;

    println!(
        "Localization run finished. Wrote {} file(s), skipped {}.",
        written, skipped
    );
    println!(
        "Values that could not be replaced ({} distinct) are listed in {}",
        misses.len(),
        report_path.display()
    );
    Ok(())
}

/// Dialogue files to process: `.json` entries of the dataset directory,
/// minus the listing sentinel. Sorted so runs are deterministic.
fn scan_dataset_directory(dataset_dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let entries = fs::read_dir(dataset_dir)
        .map_err(|e| format!("Failed to read dataset directory {:?}: {}", dataset_dir, e))?;

    let mut dialogue_files = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| format!("Failed to read dataset directory {:?}: {}", dataset_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match path.file_name().and_then(|name| name.to_str()) {
            Some(DATASET_LISTING) => continue,
            Some(name) if name.ends_with(".json") => dialogue_files.push(path),
            _ => continue,
        }
    }
    dialogue_files.sort();
    Ok(dialogue_files)
}

fn localize_file(
    file_path: &Path,
    localizers: &[DomainLocalizer],
    misses: &mut MissTracker,
) -> Result<DialogueRecord, LocalizeError> {
    let mut record = dataset_io::load_dialogue_record(file_path).map_err(LocalizeError::Record)?;
    localize_record(&mut record, localizers, misses)?;
    Ok(record)
}
