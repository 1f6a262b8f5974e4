//! Exit codes and error output of the CLI.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_missing_database_with_autoinit_disabled() {
    let env = TestEnv::new();

    env.command()
        .args(["--disable-autoinit", "property", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Database not found"));
    assert!(!env.database().exists());
}

#[test]
fn test_autoinit_disabled_by_config() {
    let env = TestEnv::new();
    env.write_config("disable_autoinit: true\n");

    env.command().args(["property", "list"]).assert().code(3);
}

#[test]
fn test_bad_config_exits_seven() {
    let env = TestEnv::new();
    env.write_config("no_such_key: 1\n");

    env.command()
        .args(["property", "list"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_explicit_config_exits_seven() {
    let env = TestEnv::new();
    let missing = env.path().join("missing.yaml");

    env.command()
        .arg("--config")
        .arg(&missing)
        .args(["property", "list"])
        .assert()
        .code(7);
}

#[test]
fn test_reversed_dates_exit_four() {
    let env = TestEnv::new();
    let property = env.add_property("1", 4, "120.00");

    env.command()
        .args(common::book_args(property, "2025-09-04", "2025-09-01", 1))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("before check-in"));
}

#[test]
fn test_unknown_property_booking_exits_three() {
    let env = TestEnv::new();
    env.command()
        .args(common::book_args(77, "2025-09-01", "2025-09-02", 1))
        .assert()
        .code(3);
}

#[test]
fn test_clap_rejects_bad_date() {
    let env = TestEnv::new();
    env.command()
        .args([
            "availability",
            "--property",
            "1",
            "--start",
            "yesterday",
            "--end",
            "2025-09-02",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--start"));
}

#[test]
fn test_data_dir_from_environment() {
    let env = TestEnv::new();
    env.command_bare()
        .env("INNKEEP_DATA_DIR", &env.data_dir)
        .args(["property", "list", "--format", "json"])
        .assert()
        .success()
        .stdout("[]\n");
    assert!(env.database().exists());
}
