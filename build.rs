use std::path::Path;
use std::process::Command;

/// Embeds the short commit hash so `chartmark --version` can report the build.
///
/// Packaged builds without a checkout can pass `CHARTMARK_GIT_HASH` through the
/// environment instead.
fn main() {
    println!("cargo:rerun-if-env-changed=CHARTMARK_GIT_HASH");

    let hash = std::env::var("CHARTMARK_GIT_HASH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CHARTMARK_GIT_HASH={hash}");

    for tracked in [".git/HEAD", ".git/refs", ".git/packed-refs"] {
        if Path::new(tracked).exists() {
            println!("cargo:rerun-if-changed={tracked}");
        }
    }
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}
