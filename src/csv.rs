// src/csv.rs

//! Minimal CSV writing for the table dump. std-only, comma-separated,
//! quotes only when a field needs them.

use std::io::{self, Write};

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let fields: Vec<String> = row
        .iter()
        .map(|cell| {
            if needs_quotes(cell) {
                format!("\"{}\"", cell.replace('"', "\"\""))
            } else {
                cell.clone()
            }
        })
        .collect();
    writeln!(w, "{}", fields.join(","))
}

/// Render rows to one CSV string.
pub fn to_csv_string(rows: &[Vec<String>]) -> String {
    let mut buf = Vec::new();
    for row in rows {
        // Writing to a Vec<u8> cannot fail.
        let _ = write_row(&mut buf, row);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_stay_unquoted() {
        let rows = vec![vec![s!("Episode"), s!("2000")], vec![s!("1"), s!("8.1")]];
        assert_eq!(to_csv_string(&rows), "Episode,2000\n1,8.1\n");
    }

    #[test]
    fn fields_with_commas_get_quoted_and_escaped() {
        let rows = vec![vec![s!("a,b"), s!(r#"say "hi""#)]];
        assert_eq!(to_csv_string(&rows), "\"a,b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn empty_cells_are_preserved() {
        let rows = vec![vec![s!("1"), s!(), s!("7.0")]];
        assert_eq!(to_csv_string(&rows), "1,,7.0\n");
    }
}
