//! Quarter headers for rendering condensed rows.

use play_rules::{ordinal, PeriodNaming, QuarterLabel};

use super::CondensedRow;

/// One line of a rendered scoring summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryLine<'a> {
    Header(String),
    Row(&'a CondensedRow),
    /// Placeholder for a game with nothing to show.
    NoEvents,
}

impl std::fmt::Display for SummaryLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryLine::Header(header) => f.write_str(header),
            SummaryLine::Row(row) => {
                write!(f, "{}", row.time)?;
                if let Some(score_type) = row.score_type {
                    write!(f, " {}", score_type.abbrev())?;
                }
                write!(f, " {} {}-{}", row.text, row.score[0], row.score[1])
            }
            SummaryLine::NoEvents => f.write_str("No scoring events"),
        }
    }
}

/// Header text for a period: "1st quarter", "2nd half", or "Overtime".
pub fn quarter_header<N>(quarter: QuarterLabel, num_periods: u32, naming: &N) -> String
where
    N: PeriodNaming + ?Sized,
{
    match quarter {
        QuarterLabel::Quarter(n) => format!("{} {}", ordinal(n), naming.period_name(num_periods)),
        QuarterLabel::Overtime => "Overtime".to_string(),
    }
}

/// Interleave quarter headers with rows.
///
/// A header precedes the first row and every row whose quarter differs from
/// the row before it.
pub fn group_by_quarter<'a, N>(rows: &'a [CondensedRow], num_periods: u32, naming: &N) -> Vec<SummaryLine<'a>>
where
    N: PeriodNaming + ?Sized,
{
    if rows.is_empty() {
        return vec![SummaryLine::NoEvents];
    }

    let mut lines = Vec::with_capacity(rows.len() + num_periods as usize);
    let mut previous: Option<QuarterLabel> = None;

    for row in rows {
        if previous != Some(row.quarter) {
            lines.push(SummaryLine::Header(quarter_header(row.quarter, num_periods, naming)));
            previous = Some(row.quarter);
        }
        lines.push(SummaryLine::Row(row));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use play_rules::{ScoreType, Side, StandardPeriodNames};

    fn row(quarter: QuarterLabel) -> CondensedRow {
        CondensedRow {
            side: Side::Home,
            score: [6, 0],
            score_type: None,
            text: "Back rushed for 1 yards and a touchdown!".to_string(),
            quarter,
            time: "5:00".to_string(),
        }
    }

    #[test]
    fn test_headers_at_quarter_changes() {
        let rows = vec![
            row(QuarterLabel::Quarter(1)),
            row(QuarterLabel::Quarter(1)),
            row(QuarterLabel::Quarter(2)),
            row(QuarterLabel::Overtime),
        ];

        let lines = group_by_quarter(&rows, 4, &StandardPeriodNames);
        let headers: Vec<(usize, String)> = lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| match line {
                SummaryLine::Header(h) => Some((i, h.clone())),
                _ => None,
            })
            .collect();

        assert_eq!(
            headers,
            vec![
                (0, "1st quarter".to_string()),
                (3, "2nd quarter".to_string()),
                (5, "Overtime".to_string()),
            ]
        );
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_empty_rows_render_placeholder() {
        let lines = group_by_quarter(&[], 4, &StandardPeriodNames);
        assert_eq!(lines, vec![SummaryLine::NoEvents]);
        assert_eq!(lines[0].to_string(), "No scoring events");
    }

    #[test]
    fn test_host_period_names() {
        let naming = |num_periods: u32| if num_periods == 2 { "half" } else { "frame" };
        assert_eq!(quarter_header(QuarterLabel::Quarter(2), 2, &naming), "2nd half");
        assert_eq!(quarter_header(QuarterLabel::Quarter(3), 9, &naming), "3rd frame");
    }

    #[test]
    fn test_row_display() {
        let rows = vec![row(QuarterLabel::Quarter(1))];
        let lines = group_by_quarter(&rows, 4, &StandardPeriodNames);
        assert_eq!(lines[1].to_string(), "5:00 Back rushed for 1 yards and a touchdown! 6-0");

        let typed = CondensedRow {
            score_type: Some(ScoreType::Touchdown),
            ..row(QuarterLabel::Quarter(1))
        };
        assert_eq!(
            SummaryLine::Row(&typed).to_string(),
            "5:00 TD Back rushed for 1 yards and a touchdown! 6-0"
        );
    }
}
