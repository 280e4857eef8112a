use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const TARGET: &str = "src/main/kotlin/com/massapay/agent/ui/screens/DashboardScreen.kt";

pub fn dashpatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dashpatch").unwrap();
    cmd.env_remove("DASHPATCH_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// `count` numbered lines, each ending in `eol`.
pub fn numbered(count: usize, eol: &str) -> String {
    (1..=count).map(|n| format!("line {}{}", n, eol)).collect()
}

/// Write `content` to the dashboard target under `root` and return its path.
pub fn write_target(root: &Path, content: &[u8]) -> PathBuf {
    let path = root.join(TARGET);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}
