// Forwards the frontend's settings from .env to option_env!. Only the keys
// config.rs reads are passed through; anything else in the file is reported.

use std::collections::HashMap;
use std::env;
use std::fs;

const ENV_FILE: &str = ".env";
const CONFIG_KEYS: [&str; 2] = ["BACKEND_URL", "ENABLE_LOGGING"];

fn read_env_file(path: &str) -> HashMap<String, String> {
    let Ok(contents) = fs::read_to_string(path) else {
        return HashMap::new();
    };

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", ENV_FILE);

    let file_values = read_env_file(ENV_FILE);

    for key in file_values.keys() {
        if !CONFIG_KEYS.contains(&key.as_str()) {
            println!("cargo:warning={} sets {}, which the booking UI doesn't read", ENV_FILE, key);
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);

        // The build environment overrides the file
        if env::var(key).is_ok() {
            continue;
        }
        if let Some(value) = file_values.get(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
