//! Build script for the dxhealth crate.
//!
//! Loads the Firebase web configuration at compile time so `EnvConfig` can read it
//! through `option_env!()`.
//!
//! Priority order:
//! 1. Environment variables already set (e.g., from CI/CD, system env)
//! 2. Variables from `.env` file (if it exists)
//! 3. Variables from `.env.example` file (fallback for CI builds)

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let crate_root = PathBuf::from(&manifest_dir);
    let env_file = crate_root.join(".env");
    let env_example_file = crate_root.join(".env.example");

    let required_vars = [
        "FIREBASE_API_KEY",
        "FIREBASE_AUTH_DOMAIN",
        "FIREBASE_PROJECT_ID",
    ];
    let env_vars_set = required_vars
        .iter()
        .filter(|&var| env::var(var).is_ok())
        .count();

    let (file_to_load, file_description) = if env_file.exists() {
        (Some(env_file), ".env")
    } else if env_vars_set == 0 && env_example_file.exists() {
        (Some(env_example_file), ".env.example (fallback)")
    } else {
        (None, "")
    };

    if let Some(file_path) = file_to_load {
        println!(
            "cargo:warning=Found {} file, loading Firebase configuration (environment variables take priority)",
            file_description
        );

        let contents = fs::read_to_string(&file_path).expect("Failed to read env file");

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // KEY=VALUE, only FIREBASE_* keys are forwarded
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                if key.starts_with("FIREBASE_") && env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else if env_vars_set > 0 {
        println!(
            "cargo:warning=Using Firebase configuration from environment variables ({}/{} set)",
            env_vars_set,
            required_vars.len()
        );
    }
}
