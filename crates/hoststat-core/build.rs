use std::env;
use std::process::Command;

fn main() {
    // Packagers building from a tarball can pin the revision explicitly.
    let sha = env::var("HOSTSTAT_GIT_SHA")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "--short", "HEAD"])
                .output()
                .ok()
                .filter(|o| o.status.success())
                .and_then(|o| String::from_utf8(o.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=HOSTSTAT_GIT_SHA={sha}");

    println!("cargo:rerun-if-env-changed=HOSTSTAT_GIT_SHA");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");
}
