mod utils;

use assert_fs::prelude::*;
use utils::snapbox::get_snapbox;

const COMPACT_CONFIG: &str = r#"{"networks":{"hardhat":{"chainId":1337,"forking":{"url":"https://example.com/rpc","blockNumber":22026011},"accounts":{"accountsToImpersonate":["0x39E419bA25196794B595B2a595Ea8E527ddC9856"]}}}}
"#;

#[test]
fn test_config_from_env() {
    let pt = assert_fs::TempDir::new().unwrap();

    get_snapbox(&pt)
        .env("MAINNET_URL", "https://example.com/rpc")
        .arg("config")
        .arg("--compact")
        .assert()
        .success()
        .stdout_eq(COMPACT_CONFIG);
}

#[test]
fn test_config_pretty_by_default() {
    let pt = assert_fs::TempDir::new().unwrap();

    let assert = get_snapbox(&pt)
        .env("MAINNET_URL", "http://127.0.0.1:8545")
        .arg("config")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("\"url\": \"http://127.0.0.1:8545\""));
    assert!(stdout.contains("\"chainId\": 1337"));
    assert!(stdout.contains("\"blockNumber\": 22026011"));
    assert!(stdout.contains("\"0x39E419bA25196794B595B2a595Ea8E527ddC9856\""));
}

#[test]
fn test_config_unset_url() {
    let pt = assert_fs::TempDir::new().unwrap();

    get_snapbox(&pt)
        .arg("config")
        .assert()
        .code(1)
        .stdout_eq("")
        .stderr_matches("error: `MAINNET_URL` is not set.[..]\n");
}

#[test]
fn test_config_empty_url() {
    let pt = assert_fs::TempDir::new().unwrap();

    get_snapbox(&pt)
        .env("MAINNET_URL", "")
        .arg("config")
        .assert()
        .code(1)
        .stdout_eq("")
        .stderr_matches("error: `MAINNET_URL` is empty.[..]\n");
}

#[test]
fn test_config_wrong_scheme() {
    let pt = assert_fs::TempDir::new().unwrap();

    get_snapbox(&pt)
        .env("MAINNET_URL", "ftp://example.com")
        .arg("config")
        .assert()
        .code(1)
        .stdout_eq("")
        .stderr_matches(
            "error: `MAINNET_URL` must start with `http://` or `https://`, got \
             `ftp://example.com`.\n",
        );
}

#[test]
fn test_fork_url_flag_overrides_env() {
    let pt = assert_fs::TempDir::new().unwrap();

    get_snapbox(&pt)
        .env("MAINNET_URL", "ftp://example.com")
        .args(["--fork-url", "https://example.com/rpc", "config", "--compact"])
        .assert()
        .success()
        .stdout_eq(COMPACT_CONFIG);
}

#[test]
fn test_fork_url_flag_is_validated() {
    let pt = assert_fs::TempDir::new().unwrap();

    get_snapbox(&pt)
        .env("MAINNET_URL", "https://example.com/rpc")
        .args(["--fork-url", "localhost:8545", "config"])
        .assert()
        .code(1)
        .stderr_matches(
            "error: `--fork-url` must start with `http://` or `https://`, got \
             `localhost:8545`.\n",
        );
}

#[test]
fn test_empty_fork_url_flag_is_reported() {
    let pt = assert_fs::TempDir::new().unwrap();

    get_snapbox(&pt)
        .env("MAINNET_URL", "https://example.com/rpc")
        .args(["--fork-url", "", "config"])
        .assert()
        .code(1)
        .stdout_eq("")
        .stderr_matches("error: `--fork-url` is empty.[..]\n");
}

#[cfg(unix)]
#[test]
fn test_config_invalid_unicode_url() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let pt = assert_fs::TempDir::new().unwrap();

    let assert = get_snapbox(&pt)
        .env("MAINNET_URL", OsStr::from_bytes(b"https://\xff"))
        .arg("config")
        .assert()
        .code(1)
        .stdout_eq("");

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("`MAINNET_URL` contains invalid unicode."), "{stderr}");
}

#[test]
fn test_config_from_dotenv() {
    let pt = assert_fs::TempDir::new().unwrap();
    pt.child(".env").write_str("MAINNET_URL=https://example.com/rpc\n").unwrap();

    get_snapbox(&pt)
        .args(["config", "--compact"])
        .assert()
        .success()
        .stdout_eq(COMPACT_CONFIG);
}

#[test]
fn test_env_takes_precedence_over_dotenv() {
    let pt = assert_fs::TempDir::new().unwrap();
    pt.child(".env").write_str("MAINNET_URL=ftp://example.com\n").unwrap();

    get_snapbox(&pt)
        .env("MAINNET_URL", "https://example.com/rpc")
        .args(["config", "--compact"])
        .assert()
        .success()
        .stdout_eq(COMPACT_CONFIG);
}

#[test]
fn test_no_dotenv_skips_file() {
    let pt = assert_fs::TempDir::new().unwrap();
    pt.child(".env").write_str("MAINNET_URL=https://example.com/rpc\n").unwrap();

    get_snapbox(&pt)
        .args(["--no-dotenv", "config"])
        .assert()
        .code(1)
        .stderr_matches("error: `MAINNET_URL` is not set.[..]\n");
}
