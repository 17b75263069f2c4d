use std::env;
use std::path::PathBuf;
use std::process;

use proxy_config::{DevServerConfig, EnvSnapshot};

fn main() {
    let start_dir = match env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => match env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Failed to resolve working directory: {}", e);
                process::exit(1);
            }
        },
    };

    let snapshot = match EnvSnapshot::load(&start_dir) {
        Ok(snapshot) => snapshot.with_process_env(),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let config = match DevServerConfig::from_snapshot(&snapshot) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Some(rule) = config.api_rule() {
        if let Err(e) = rule.target_uri() {
            eprintln!("Warning: {}", e);
        }
    }

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize configuration: {}", e);
            process::exit(1);
        }
    }
}
