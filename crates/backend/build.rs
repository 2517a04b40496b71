use std::path::{Path, PathBuf};

// config.toml из корня workspace кладётся рядом с бинарником
// (target/<profile>/config.toml), где его ищет load_config().
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let Some(workspace_root) = Path::new(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2) else {
        return;
    };
    let source = workspace_root.join("config.toml");
    if !source.is_file() {
        println!("cargo:warning=no config.toml in workspace root, the embedded default will be used");
        return;
    }

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=cannot locate target profile directory, config.toml not copied");
        return;
    };
    if let Err(e) = std::fs::copy(&source, target_dir.join("config.toml")) {
        panic!("failed to copy config.toml to {}: {}", target_dir.display(), e);
    }
}

/// target/debug или target/release (OUT_DIR = target/<profile>/build/backend-*/out)
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR")?);
    let profile = std::env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
