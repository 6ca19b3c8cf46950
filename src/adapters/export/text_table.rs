//! Plain-text table rendering for terminal output.

use crate::domain::topsis::Ranking;
use crate::ports::{RANK_COLUMN, SCORE_COLUMN};

/// Decimal places used for scores in the text table.
pub const SCORE_PRECISION: usize = 6;

/// Renders the ranking as an aligned text table, best row first.
///
/// Text columns are left-aligned and numeric columns right-aligned.
pub fn render_table(ranking: &Ranking) -> String {
    let headers = ranking.columns(SCORE_COLUMN, RANK_COLUMN);

    let body: Vec<Vec<String>> = ranking
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.identifier.clone())
                .chain(row.values.iter().map(|v| v.to_string()))
                .chain([
                    format!("{:.*}", SCORE_PRECISION, row.score),
                    row.rank.to_string(),
                ])
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            body.iter()
                .map(|cells| cells[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, width))| {
                if col == 0 {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format_line(&headers));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(body.iter().map(|cells| format_line(cells)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::ResultRow;

    fn ranking() -> Ranking {
        Ranking {
            identifier_header: "Name".to_string(),
            criteria: vec!["C1".to_string()],
            rows: vec![
                ResultRow {
                    identifier: "Alpha".to_string(),
                    input_index: 0,
                    values: vec![10.0],
                    score: 1.0,
                    rank: 1,
                },
                ResultRow {
                    identifier: "B".to_string(),
                    input_index: 1,
                    values: vec![2.5],
                    score: 0.0,
                    rank: 2,
                },
            ],
        }
    }

    #[test]
    fn renders_header_rule_and_rows() {
        let table = render_table(&ranking());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Name    C1  Topsis Score  Rank");
        assert_eq!(lines[1], "-----  ---  ------------  ----");
        assert_eq!(lines[2], "Alpha   10      1.000000     1");
        assert_eq!(lines[3], "B      2.5      0.000000     2");
    }

    #[test]
    fn scores_use_six_decimal_places() {
        let mut ranking = ranking();
        ranking.rows[0].score = 0.123456789;
        assert!(render_table(&ranking).contains("0.123457"));
    }
}
