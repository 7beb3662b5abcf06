use hindiweave::config::Config;
use std::env;
use std::fs;

const MINIMAL: &str = r#"
database_workbook = "./db.xlsx"
dataset_dir = "./dataset/"
output_root = "./out/"
"#;

#[test]
fn minimal_config_gets_the_default_alias_and_domain() {
    let config: Config = toml::from_str(MINIMAL).unwrap();

    assert_eq!(config.miss_report, "not_found_hindi.json");
    assert!(!config.continue_on_record_error);
    assert_eq!(
        config.aliases.get("entrancefee").map(String::as_str),
        Some("entrance fee")
    );
    assert_eq!(config.domains.len(), 1);
    assert_eq!(config.domains[0].goal_key, "attraction");
    assert_eq!(config.domains[0].act_tag, "Attraction");
}

#[test]
fn full_config_overrides_every_default() {
    let config: Config = toml::from_str(
        r#"
database_workbook = "./db.xlsx"
dataset_dir = "./dataset/"
output_root = "./out/"
miss_report = "unmatched.json"
continue_on_record_error = true

[aliases]
pricerange = "price range"

[[domains]]
goal_key = "restaurant"
act_tag = "Restaurant"

[[domains]]
goal_key = "taxi"
act_tag = "Taxi"
"#,
    )
    .unwrap();

    assert_eq!(config.miss_report, "unmatched.json");
    assert!(config.continue_on_record_error);
    assert!(config.aliases.get("entrancefee").is_none());
    assert_eq!(config.domains.len(), 2);
    assert_eq!(config.domains[1].goal_key, "taxi");
}

#[test]
fn validate_rejects_missing_inputs() {
    let config: Config = toml::from_str(MINIMAL).unwrap();
    // Relative to the test runner's cwd neither path exists.
    assert!(config.validate().is_err());
}

#[test]
fn validate_accepts_existing_inputs() {
    let scratch = env::temp_dir().join("hindiweave_config_test");
    let dataset_dir = scratch.join("dataset");
    fs::create_dir_all(&dataset_dir).unwrap();
    let workbook = scratch.join("db.xlsx");
    fs::write(&workbook, b"stub").unwrap();

    let config: Config = toml::from_str(&format!(
        "database_workbook = {:?}\ndataset_dir = {:?}\noutput_root = {:?}\n",
        workbook.display().to_string(),
        dataset_dir.display().to_string(),
        scratch.join("out").display().to_string(),
    ))
    .unwrap();

    assert!(config.validate().is_ok());
}
