use std::io::Write;

use assert_cmd::Command;
use predicates as pred;
use tempfile::NamedTempFile;

fn bank_api() -> Command {
    let exe = env!("CARGO_BIN_EXE_bank_api");
    let mut cmd = Command::new(exe);
    // keep these runs independent of the caller's environment
    cmd.env_remove("BANK_API_HOST")
        .env_remove("BANK_API_PORT")
        .env_remove("BANK_API_ACCOUNTS");
    cmd
}

#[test]
fn help_lists_configuration_flags() {
    bank_api()
        .arg("--help")
        .assert()
        .success()
        .stdout(pred::str::contains("--host"))
        .stdout(pred::str::contains("--port"))
        .stdout(pred::str::contains("--accounts"));
}

#[test]
fn missing_seed_file_aborts_startup() {
    bank_api()
        .args(["--port", "0", "--accounts", "/definitely/not/here.csv"])
        .assert()
        .failure()
        .stderr(pred::str::contains("cannot open /definitely/not/here.csv"));
}

#[test]
fn invalid_seed_row_aborts_startup() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "id, pin, balance\n\
    alice, 1111, 10.00\n\
    bob, 2222, -3"
    )
    .unwrap();

    bank_api()
        .args(["--port", "0", "--accounts"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(pred::str::contains("line 3"))
        .stderr(pred::str::contains("negative balance"));
}

#[test]
fn duplicate_seed_ids_abort_startup() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "id,pin,balance\n\
    alice,1111,10\n\
    alice,2222,20"
    )
    .unwrap();

    bank_api()
        .args(["--port", "0", "--accounts"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(pred::str::contains("Account alice already exists"));
}
