#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_sample(dir: &TempDir, rows: usize) {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    for r in 1..=rows as u32 {
        sheet.get_cell_mut((1, r)).set_value(format!("oyuncu{r}"));
        sheet.get_cell_mut((2, r)).set_value_number(r * 10);
    }
    umya_spreadsheet::writer::xlsx::write(&book, dir.path().join(xlhead::DEFAULT_FILE_PATH))
        .unwrap();
}

#[test]
fn prints_head_of_fixed_file() {
    let dir = TempDir::new().unwrap();
    write_sample(&dir, 7);

    Command::cargo_bin("inspect_excel")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("First 5 rows:\n"))
        .stdout(predicate::str::contains("oyuncu5"))
        .stdout(predicate::str::contains("oyuncu6").not());
}

#[test]
fn missing_file_still_exits_successfully() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("inspect_excel")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error reading file: "))
        .stdout(predicate::str::contains("panicked").not());
}

#[test]
fn arguments_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_sample(&dir, 2);

    Command::cargo_bin("inspect_excel")
        .unwrap()
        .current_dir(dir.path())
        .arg("other.xlsx")
        .assert()
        .success()
        .stdout(predicate::str::contains("oyuncu2"));
}
