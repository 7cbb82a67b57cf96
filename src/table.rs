// src/table.rs

//! Season-by-episode rating table.
//!
//! Columns are broadcast years, rows are episode positions within a year.
//! A cell is `None` when that year has no episode at that position —
//! deliberately distinct from a rating of 0.0.

/// Immutable once built; produced by the retriever, consumed by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingTable {
    years: Vec<i32>,
    /// Row-major: cells[row][col], parallel to `years`.
    cells: Vec<Vec<Option<f64>>>,
}

impl RatingTable {
    /// Year keys, ascending as collected.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn col_count(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() || self.years.is_empty()
    }

    /// Cell by zero-based (row, col). `None` = no episode there.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row).and_then(|r| *r.get(col)?)
    }

    /// Display label for a row: episode indices start at 1, consecutively.
    pub fn episode_label(&self, row: usize) -> usize {
        row + 1
    }

    /// Rows as strings for the CSV dump: header, then one row per episode
    /// with empty cells where no episode exists.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.row_count() + 1);

        let mut header = vec![s!("Episode")];
        header.extend(self.years.iter().map(|y| y.to_string()));
        out.push(header);

        for (r, row) in self.cells.iter().enumerate() {
            let mut line = vec![self.episode_label(r).to_string()];
            for cell in row {
                line.push(match cell {
                    Some(v) => format!("{v:.1}"),
                    None => s!(),
                });
            }
            out.push(line);
        }
        out
    }
}

/// Incremental column-by-column construction during retrieval.
pub struct TableBuilder {
    columns: Vec<(i32, Vec<Option<f64>>)>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    /// Append one year's episode ratings in air order.
    pub fn push_year(&mut self, year: i32, ratings: Vec<f64>) {
        self.columns
            .push((year, ratings.into_iter().map(Some).collect()));
    }

    /// Pad short columns with the absent marker, drop rows and columns
    /// that are absent across the board, and hand back the finished table.
    pub fn finish(self) -> RatingTable {
        // Columns with no episodes at all carry no information.
        let columns: Vec<(i32, Vec<Option<f64>>)> = self
            .columns
            .into_iter()
            .filter(|(_, col)| col.iter().any(Option::is_some))
            .collect();

        let depth = columns.iter().map(|(_, col)| col.len()).max().unwrap_or(0);
        let years: Vec<i32> = columns.iter().map(|(y, _)| *y).collect();

        let mut cells: Vec<Vec<Option<f64>>> = Vec::with_capacity(depth);
        for row in 0..depth {
            let line: Vec<Option<f64>> = columns
                .iter()
                .map(|(_, col)| col.get(row).copied().flatten())
                .collect();
            // Skip rows with no episode in any year; survivors re-index
            // from 1 via episode_label.
            if line.iter().any(Option::is_some) {
                cells.push(line);
            }
        }

        RatingTable { years, cells }
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
