use std::fmt;

use calamine::{Data, Range};

use crate::cell::cell_to_string;

const MISSING: &str = "NaN";

/// Rows of cells read from a sheet, with no header row.
///
/// The table is anchored at A1 and always rectangular: every row holds
/// [`Table::width`] cells, short rows padded with [`Data::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<Data>>,
    width: usize,
}

impl Table {
    pub fn from_rows(rows: Vec<Vec<Data>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Data::Empty);
                row
            })
            .collect();
        Self { rows, width }
    }

    /// Builds the table from a worksheet range.
    ///
    /// calamine trims a range to its first used cell; blank rows and
    /// columns above and left of it are restored so row 0 is sheet row 1.
    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((last_row, last_col)) = range.end() else {
            return Self::default();
        };

        let rows = (0..=last_row)
            .map(|row| {
                (0..=last_col)
                    .map(|col| range.get_value((row, col)).cloned().unwrap_or(Data::Empty))
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Data]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Data> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// The first `n` rows, or every row when there are fewer.
    pub fn head(&self, n: usize) -> Table {
        Table {
            rows: self.rows.iter().take(n).cloned().collect(),
            width: self.width,
        }
    }
}

fn display_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => MISSING.to_string(),
        // Control characters are escaped so each row stays on one line.
        other => cell_to_string(other)
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t"),
    }
}

impl fmt::Display for Table {
    /// Renders every row and column, nothing elided. Row indices run down
    /// the left, column indices across the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "Empty DataFrame")?;
            writeln!(f, "Columns: []")?;
            return write!(f, "Index: []");
        }

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(display_cell).collect())
            .collect();

        let index_width = (self.height() - 1).to_string().len();
        let col_widths: Vec<usize> = (0..self.width)
            .map(|col| {
                cells
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(col.to_string().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (col, width) in col_widths.iter().enumerate() {
            write!(f, "  {:>width$}", col)?;
        }

        for (idx, row) in cells.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:<index_width$}", idx)?;
            for (value, width) in row.iter().zip(&col_widths) {
                write!(f, "  {:>width$}", value)?;
            }
        }
        Ok(())
    }
}
