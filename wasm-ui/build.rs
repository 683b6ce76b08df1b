//! Build script to capture build information.
//!
//! Sets environment variables at compile time:
//! - BUILD_HOST: hostname of the build machine
//! - BUILD_COMMIT: short git commit SHA
//! - BUILD_TIMESTAMP: ISO 8601 timestamp
//!
//! `APP_*` bootstrap settings are read with `option_env!`, so changing them
//! must trigger a rebuild.

use std::process::Command;

fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let hostname = command_output("hostname", &["-s"]);
    let commit = command_output("git", &["rev-parse", "--short", "HEAD"]);
    let timestamp = command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]);

    println!("cargo:rustc-env=BUILD_HOST={}", hostname);
    println!("cargo:rustc-env=BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", timestamp);

    for key in ["APP_MOUNT_SELECTOR", "APP_ASSET_BASE", "APP_FAILURE_POLICY"] {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Rerun if git HEAD changes
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
