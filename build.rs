/// Build script for sortviz
/// Captures build metadata so a run can be attributed to an exact build

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Embed version information
    if let Ok(version) = std::env::var("CARGO_PKG_VERSION") {
        println!("cargo:rustc-env=SORTVIZ_VERSION={version}");
    }

    // Capture git hash for replay reports
    if let Ok(output) = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
    {
        if output.status.success() {
            if let Ok(hash) = String::from_utf8(output.stdout) {
                println!("cargo:rustc-env=GIT_HASH={}", hash.trim());
            }
        }
    }
}
