use clap::Parser;
use hindiweave::{config, pipeline};
use std::process;

/// Replaces English slot values in dialogue datasets with their Hindi
/// equivalents from a bilingual reference workbook.
#[derive(Parser, Debug)]
#[command(name = "hindiweave", version, about)]
struct Cli {
    /// Run configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,
    /// Override the reference workbook path from the config
    #[arg(long)]
    database_workbook: Option<String>,
    /// Override the input dataset directory from the config
    #[arg(long)]
    dataset_dir: Option<String>,
    /// Override the output directory from the config
    #[arg(long)]
    output_root: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let mut run_config = match config::load_config_from_file(&cli.config) {
        Ok(loaded_config) => loaded_config,
        Err(err_msg) => {
            eprintln!("Error loading {}: {}", cli.config, err_msg);
            process::exit(1);
        }
    };
    if let Some(path) = cli.database_workbook {
        run_config.database_workbook = path;
    }
    if let Some(path) = cli.dataset_dir {
        run_config.dataset_dir = path;
    }
    if let Some(path) = cli.output_root {
        run_config.output_root = path;
    }
    if let Err(err_msg) = run_config.validate() {
        eprintln!("{}", err_msg);
        process::exit(1);
    }

    if let Err(e) = pipeline::run_localization(&run_config) {
        eprintln!("Localization run failed: {}", e);
        process::exit(1);
    }
}
