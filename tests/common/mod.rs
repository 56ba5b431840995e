//! Helpers shared by the integration tests.

use assert_cmd::Command;
use std::path::Path;

/// A `yamlref` command isolated from the user's configuration and logging
/// environment. `scratch` is a directory the test owns; the default config
/// location is pointed into it and never created.
pub fn yamlref(scratch: &Path) -> Command {
    let mut cmd = Command::cargo_bin("yamlref").unwrap();
    cmd.env("YAMLREF_CONFIG", scratch.join("no-such-config.toml"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Path argument as a string.
pub fn arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
