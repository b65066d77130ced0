//! Aggregated results of a harness run.

use serde::{Deserialize, Serialize};

use super::params::{Combination, ParamValue};
use super::stats::Summary;
use super::table::{Align, Table};

/// Summary statistics for one parameter combination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub combination: Combination,
    pub summary: Summary,
}

/// One row per combination, in grid expansion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    param_names: Vec<String>,
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(param_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            param_names: param_names.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, combination: Combination, summary: Summary) {
        self.rows.push(ReportRow {
            combination,
            summary,
        });
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Parameter names followed by `median`, `mean`, `stdev`.
    pub fn headers(&self) -> Vec<String> {
        self.param_names
            .iter()
            .cloned()
            .chain(Summary::NAMES.iter().map(|s| s.to_string()))
            .collect()
    }

    /// Summary of the first row whose combination matches `combination`.
    #[must_use]
    pub fn summary(&self, combination: &Combination) -> Option<&Summary> {
        self.rows
            .iter()
            .find(|row| &row.combination == combination)
            .map(|row| &row.summary)
    }

    /// Render as a table. Statistics are shown to two decimals.
    ///
    /// Statistics and parameters whose values are all `Int` or `Float` are
    /// right-aligned; other parameters are left-aligned.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(self.headers());
        let params = self.param_names.len();
        for column in 0..params {
            let numeric = self.rows.iter().all(|row| {
                row.combination
                    .values()
                    .nth(column)
                    .map_or(true, ParamValue::is_number)
            });
            if numeric {
                table.set_align(column, Align::Right);
            }
        }
        for column in params..params + Summary::NAMES.len() {
            table.set_align(column, Align::Right);
        }
        for row in &self.rows {
            let cells = row
                .combination
                .values()
                .map(ToString::to_string)
                .chain(row.summary.values().into_iter().map(|v| format!("{:.2}", v)));
            table.push_row(cells);
        }
        table
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_table())
    }
}
