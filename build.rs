use std::process::Command;

/// Short git hash of the build, or "unknown" outside a checkout.
fn git_short_hash() -> String {
    match Command::new("git").args(["rev-parse", "--short", "HEAD"]).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // Embedded in `gridword --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_short_hash());

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
