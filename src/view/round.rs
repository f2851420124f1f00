use std::fmt::Write;

use crate::model::{Round, format_score_to_par, line_scores};

#[must_use]
pub fn render_round_row(round: &Round) -> String {
    format!(
        "{}  {}  {} ({} holes)  Total: {}  {}",
        round.id,
        round.start_date.format("%Y-%m-%d"),
        round.course_name,
        round.holes_count.get(),
        round.total_strokes(),
        format_score_to_par(round.score_relative_to_par()),
    )
}

#[must_use]
pub fn render_round_list(rounds: &[Round]) -> String {
    if rounds.is_empty() {
        return "No rounds yet. Start one with new-round.".to_string();
    }
    rounds
        .iter()
        .map(render_round_row)
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn render_scorecard(round: &Round) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} - {}",
        round.course_name,
        round.start_date.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(out, "{:>4} {:>4} {:>7} {:>5}  Result", "Hole", "Par", "Strokes", "+/-");
    for line in line_scores(round) {
        let _ = writeln!(
            out,
            "{:>4} {:>4} {:>7} {:>5}  {}",
            line.hole,
            line.par,
            line.strokes,
            format_score_to_par(line.score_to_par),
            line.score_display.label(),
        );
    }
    let _ = write!(
        out,
        "Total: {} strokes, {} to par",
        round.total_strokes(),
        format_score_to_par(round.score_relative_to_par())
    );
    out
}
