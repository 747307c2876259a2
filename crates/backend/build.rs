//! Places the workspace `config.toml` next to the storefront binary so
//! `load_config` finds it at runtime.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    // OUT_DIR is target/<profile>/build/<pkg>-<hash>/out
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=No config.toml in the workspace root, the embedded defaults apply");
        return;
    }

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=Could not locate the target profile directory");
        return;
    };

    if let Err(e) = fs::copy(&source, target_dir.join("config.toml")) {
        println!("cargo:warning=Failed to copy config.toml: {e}");
    }
}
