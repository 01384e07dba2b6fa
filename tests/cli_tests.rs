use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn small_roster() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("small-roster").unwrap()
}

#[test]
fn demo_prints_transcript() {
    small_roster().assert().success().stdout(
        "Student Alex (ID: 1) added successfully.\n\
         Student Sam (ID: 2) added successfully.\n\
         Grade 85 added to student ID: 1.\n\
         Grade 90 added to student ID: 1.\n\
         Grade 78 added to student ID: 2.\n\
         Grade 88 added to student ID: 2.\n\
         Name: Alex, ID: 1, Grades: [85, 90], Average Grade: 87.50\n\
         Name: Sam, ID: 2, Grades: [78, 88], Average Grade: 83.00\n\
         Student with ID 3 not found.\n\
         A student with ID 1 already exists.\n",
    );
}

#[test]
fn demo_json_format() {
    small_roster()
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"not_found\""))
        .stdout(predicate::str::contains("\"status\":\"student_details\""));
}

#[test]
fn script_with_legacy_echo() {
    let mut script = NamedTempFile::new().unwrap();
    script
        .write_all(
            b"[[steps]]\nop = \"add_student\"\nname = \"Alex\"\nid = 1\n\n\
              [[steps]]\nop = \"add_grade\"\nid = 1\ngrade = 150\n",
        )
        .unwrap();

    small_roster()
        .arg("--script")
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade must be between 0 and 100."))
        .stdout(predicate::str::contains("Grade 150 added").not());

    small_roster()
        .arg("--script")
        .arg(script.path())
        .arg("--legacy-grade-echo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade 150 added to student ID: 1."));
}

#[test]
fn missing_script_fails() {
    small_roster()
        .args(["--script", "/no/such/roster-script.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read or write a file"));
}

#[test]
fn empty_script_fails_validation() {
    let mut script = NamedTempFile::new().unwrap();
    script.write_all(b"[settings]\nformat = \"text\"\n").unwrap();

    small_roster()
        .arg("--script")
        .arg(script.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("steps"));
}
