use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn default_date_prints_report_line() {
    Command::cargo_bin("luach")
        .unwrap()
        .assert()
        .success()
        .stdout("2015/5/13 on the Gregorian calendar is 5775/2/24 on the hebrew calendar\n");
}

#[test]
fn explicit_date_is_converted() {
    Command::cargo_bin("luach")
        .unwrap()
        .arg("2024/3/11")
        .assert()
        .success()
        .stdout("2024/3/11 on the Gregorian calendar is 5784/13/1 on the hebrew calendar\n");
}

#[test]
fn invalid_date_fails() {
    Command::cargo_bin("luach")
        .unwrap()
        .arg("2023/2/29")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid Gregorian date: 2023/2/29"));
}
