//! HTML summary of a finished analysis.

use crate::domain::topsis::{ImpactVector, Ranking, WeightVector};

/// Subject line of result emails.
pub const RESULT_SUBJECT: &str = "TOPSIS Analysis Results";

/// Rows listed in the summary table.
pub const SUMMARY_ROWS: usize = 5;

/// Escapes text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Builds the HTML body sent with the result file.
pub fn render_summary(ranking: &Ranking, weights: &WeightVector, impacts: &ImpactVector) -> String {
    let weights_text = weights
        .as_slice()
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let rows: String = ranking
        .top(SUMMARY_ROWS)
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{:.4}</td></tr>\n",
                row.rank,
                escape_html(&row.identifier),
                row.score
            )
        })
        .collect();

    format!(
        "<html>\n<body style=\"font-family: Arial, sans-serif;\">\n\
         <h2>TOPSIS Analysis Results</h2>\n\
         <p>Your TOPSIS analysis has been completed successfully.</p>\n\
         <h3>Analysis Summary</h3>\n\
         <ul>\n\
         <li><strong>Criteria:</strong> {criteria}</li>\n\
         <li><strong>Alternatives:</strong> {alternatives}</li>\n\
         <li><strong>Weights:</strong> {weights}</li>\n\
         <li><strong>Impacts:</strong> {impacts}</li>\n\
         </ul>\n\
         <h3>Top Results</h3>\n\
         <table border=\"1\" cellpadding=\"10\">\n\
         <tr><th>Rank</th><th>Alternative</th><th>Score</th></tr>\n\
         {rows}\
         </table>\n\
         <p style=\"margin-top: 20px; color: #666;\">Detailed results are attached to this email.</p>\n\
         </body>\n</html>\n",
        criteria = ranking.criteria.len(),
        alternatives = ranking.len(),
        weights = escape_html(&weights_text),
        impacts = escape_html(&impacts.joined()),
        rows = rows,
    )
}
