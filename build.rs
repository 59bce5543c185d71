use std::env;
use std::process::Command;

const VERSION_VAR: &str = "HEAP_LAYOUT_VERSION";

fn git_describe() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--tags", "--always"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let described = String::from_utf8(out.stdout).ok()?;
    Some(described.trim().to_string())
}

fn main() {
    // --version text: an explicit release version wins, then the checkout's tag.
    let version = env::var(VERSION_VAR)
        .ok()
        .filter(|v| !v.is_empty() && v != "dev")
        .or_else(git_describe)
        .unwrap_or_else(|| "dev".to_string());

    println!("cargo:rustc-env={VERSION_VAR}={version}");
    println!("cargo:rerun-if-env-changed={VERSION_VAR}");
}
