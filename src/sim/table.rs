//! Plain-text table rendering.
//!
//! Draws a boxed grid: header row, then one row per record. Alignment is
//! chosen per column by whoever fills the table; columns default to left.

use std::fmt::{self, Write as _};

/// Horizontal alignment of a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Headers plus rows of already formatted cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    aligns: Vec<Align>,
}

impl Table {
    pub fn new(headers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            aligns: Vec::new(),
        }
    }

    /// Align one column. The header follows its column.
    pub fn set_align(&mut self, column: usize, align: Align) {
        if self.aligns.len() <= column {
            self.aligns.resize(column + 1, Align::Left);
        }
        self.aligns[column] = align;
    }

    #[must_use]
    pub fn align(&self, column: usize) -> Align {
        self.aligns.get(column).copied().unwrap_or_default()
    }

    /// Append a row. Short rows are padded with empty cells.
    pub fn push_row(&mut self, cells: impl IntoIterator<Item = impl Into<String>>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for row in std::iter::once(&self.headers).chain(&self.rows) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn line(&self, f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
        f.write_char('│')?;
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            match self.align(i) {
                Align::Left => write!(f, " {:<width$} │", cell, width = *width)?,
                Align::Right => write!(f, " {:>width$} │", cell, width = *width)?,
            }
        }
        f.write_char('\n')
    }
}

fn rule(f: &mut fmt::Formatter<'_>, widths: &[usize], left: char, fill: char, mid: char, right: char) -> fmt::Result {
    f.write_char(left)?;
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            f.write_char(mid)?;
        }
        for _ in 0..width + 2 {
            f.write_char(fill)?;
        }
    }
    f.write_char(right)?;
    f.write_char('\n')
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        rule(f, &widths, '╒', '═', '╤', '╕')?;
        self.line(f, &widths, &self.headers)?;
        rule(f, &widths, '╞', '═', '╪', '╡')?;

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                rule(f, &widths, '├', '─', '┼', '┤')?;
            }
            self.line(f, &widths, row)?;
        }

        rule(f, &widths, '╘', '═', '╧', '╛')
    }
}
