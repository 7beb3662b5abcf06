use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// One dialogue domain to localize. `goal_key` addresses the domain's
/// section under a record's `goal` object; `act_tag` selects the dialogue
/// acts whose names mention the domain (e.g. "Attraction-Inform").
#[derive(Deserialize, Debug, Clone)]
pub struct DomainSpec {
    pub goal_key: String,
    pub act_tag: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Workbook holding the paired english-*/hindi-* reference sheets.
    pub database_workbook: String,
    /// Directory of dialogue JSON files to localize.
    pub dataset_dir: String,
    /// Mirrored output directory, created on demand.
    pub output_root: String,
    /// File name of the aggregate miss report, written under `output_root`.
    #[serde(default = "default_miss_report")]
    pub miss_report: String,
    /// When true, a malformed dialogue file is reported and skipped instead
    /// of aborting the whole run.
    #[serde(default)]
    pub continue_on_record_error: bool,
    /// Dialogue-act column name -> reference-table column name.
    #[serde(default = "default_aliases")]
    pub aliases: HashMap<String, String>,
    #[serde(default = "default_domains")]
    pub domains: Vec<DomainSpec>,
}

fn default_miss_report() -> String {
    "not_found_hindi.json".to_string()
}

fn default_aliases() -> HashMap<String, String> {
    // 'entrancefee' in dialogue acts is 'entrance fee' in the reference table
    let mut aliases = HashMap::new();
    aliases.insert("entrancefee".to_string(), "entrance fee".to_string());
    aliases
}

fn default_domains() -> Vec<DomainSpec> {
    vec![DomainSpec {
        goal_key: "attraction".to_string(),
        act_tag: "Attraction".to_string(),
    }]
}

impl Config {
    /// Checks that the configured input locations exist. Called after any
    /// command-line overrides have been applied.
    pub fn validate(&self) -> Result<(), String> {
        let dataset_path = PathBuf::from(&self.dataset_dir);
        if !dataset_path.is_dir() {
            return Err(format!(
                "Error: dataset_dir ('{}') is not a valid directory.",
                self.dataset_dir
            ));
        }
        let workbook_path = PathBuf::from(&self.database_workbook);
        if !workbook_path.is_file() {
            return Err(format!(
                "Error: database_workbook ('{}') is not a valid file.",
                self.database_workbook
            ));
        }
        if self.domains.is_empty() {
            return Err("Error: at least one [[domains]] entry is required.".to_string());
        }
        Ok(())
    }
}

pub fn load_config_from_file(file_path: &str) -> Result<Config, String> {
    match fs::read_to_string(file_path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(loaded_config) => Ok(loaded_config),
            Err(e) => Err(format!("Failed to parse {}: {}", file_path, e)),
        },
        Err(e) => Err(format!(
            "Failed to read {}: {}. Please ensure it exists.",
            file_path, e
        )),
    }
}
