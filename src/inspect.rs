use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use calamine::{Reader, open_workbook_auto};
use tracing::debug;

use crate::table::Table;

/// Workbook inspected by the `inspect_excel` binary, relative to the
/// working directory.
pub const DEFAULT_FILE_PATH: &str = "Performans-Data (1).xlsx";

/// Rows printed from the top of the first sheet.
pub const HEAD_ROWS: usize = 5;

pub const LABEL: &str = "First 5 rows:";
pub const ERROR_PREFIX: &str = "Error reading file:";

/// Reads the first sheet of the workbook at `path`, every row as data.
pub fn load_table(path: &Path) -> Result<Table> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("failed to open {}", path.display()))?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = sheet_names
        .first()
        .ok_or_else(|| anyhow!("workbook has no sheets: {}", path.display()))?;
    debug!(path = %path.display(), sheet = %sheet_name, "reading first sheet");

    let range = workbook
        .worksheet_range(sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let table = Table::from_range(&range);
    debug!(rows = table.height(), columns = table.width(), "sheet loaded");
    Ok(table)
}

/// The text printed for `path`: the labelled head of the sheet, or a
/// single error line when the file cannot be read.
pub fn report(path: &Path) -> String {
    match load_table(path) {
        Ok(table) => format!("{LABEL}\n{}", table.head(HEAD_ROWS)),
        Err(err) => {
            debug!(error = ?err, "inspection failed");
            format!("{ERROR_PREFIX} {err:#}")
        }
    }
}

pub fn run(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", report(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_the_head_size() {
        assert!(LABEL.contains(&HEAD_ROWS.to_string()));
    }

    #[test]
    fn missing_file_is_reported_not_raised() {
        let text = report(Path::new("definitely/not/here.xlsx"));
        assert!(text.starts_with("Error reading file: "), "{text}");
        assert!(text.len() > ERROR_PREFIX.len() + 1);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn unsupported_extension_takes_the_same_path() {
        let text = report(Path::new("notes.txt"));
        assert!(text.starts_with(ERROR_PREFIX), "{text}");
    }

    #[test]
    fn run_terminates_with_newline() {
        let mut out = Vec::new();
        run(&mut out, Path::new("missing.xlsx")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
    }
}
