use assert_fs::TempDir;
use snapbox::cmd::{cargo_bin, Command};

/// `forkcfg` running in an empty directory, without any inherited fork URL or log filter.
pub fn get_snapbox(dir: &TempDir) -> Command {
    Command::new(cargo_bin!("forkcfg"))
        .env_remove("MAINNET_URL")
        .env_remove("RUST_LOG")
        .current_dir(dir.path())
}
