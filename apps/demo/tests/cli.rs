//! End-to-end runs of the demo binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn demo() -> Command {
    let mut cmd = Command::cargo_bin("tether-demo").unwrap();
    cmd.env_remove("TETHER_POOL_MAX_IDLE")
        .env_remove("TETHER_POOL_PRE_WARM")
        .env("TETHER_LOG", "warn");
    cmd
}

#[test]
fn stack_pops_in_reverse_order() {
    demo()
        .arg("stack")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "size: 3\npeek: Some(3)\npop: Some(3)\npop: Some(2)\npop: Some(1)\npop: None\nsize: 0",
        ));
}

#[test]
fn queue_pops_in_push_order() {
    demo()
        .arg("queue")
        .assert()
        .success()
        .stdout(predicate::str::contains("pop: Some(1)\npop: Some(2)\nsize: 1\npeek: Some(3)"))
        .stdout(predicate::str::contains("pop: Some(3)\npop: None\nsize: 0"));
}

#[test]
fn list_reports_out_of_range() {
    demo()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("insert_at(1, 4): [1, 4, 2, 3]"))
        .stdout(predicate::str::contains("remove_at(0): 1 -> [2, 3]"))
        .stdout(predicate::str::contains("index_of(9): None"))
        .stdout(predicate::str::contains("[COLL:INDEX:RANGE]"));
}

#[test]
fn pool_reacquire_is_empty() {
    demo()
        .arg("pool")
        .assert()
        .success()
        .stdout(predicate::str::contains("pop: Some(20)"))
        .stdout(predicate::str::contains("reacquired size: 0"))
        .stdout(predicate::str::contains("acquires: 3 hits: 2 misses: 1 releases: 3"));
}

#[test]
fn pool_json_stats() {
    let output = demo().args(["pool", "--json"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').unwrap();
    let stats: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    assert_eq!(stats["acquires"], 3);
    assert_eq!(stats["misses"], 1);
}

#[test]
fn concurrent_loses_nothing() {
    demo()
        .args(["concurrent", "--threads", "6", "--per-thread", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pushed: 3000\npopped: 3000\nunique: 3000"));
}

#[test]
fn concurrent_rejects_zero_threads() {
    demo()
        .args(["concurrent", "--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--threads must be at least 1"));
}

#[test]
fn concurrent_rejects_overflowing_totals() {
    let per_thread = usize::MAX.to_string();
    demo()
        .args(["concurrent", "--threads", "2", "--per-thread", per_thread.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overflows usize"));
}

#[test]
fn default_runs_every_scenario() {
    demo()
        .assert()
        .success()
        .stdout(predicate::str::contains("== stack =="))
        .stdout(predicate::str::contains("== queue =="))
        .stdout(predicate::str::contains("== list =="))
        .stdout(predicate::str::contains("== pool =="))
        .stdout(predicate::str::contains("== concurrent =="));
}

#[test]
fn unknown_log_format_is_rejected() {
    demo()
        .args(["--log-format", "xml", "stack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn invalid_pool_config_fails_startup() {
    demo()
        .env("TETHER_POOL_PRE_WARM", "8")
        .args(["--max-idle", "2", "stack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pre_warm (8) exceeds max_idle (2)"));
}
