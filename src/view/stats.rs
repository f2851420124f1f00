use std::fmt::Write;

use crate::model::StatsSummary;
use crate::stats::{average_shots_per_hole, shot_distribution};

#[must_use]
pub fn render_stats(stats: &StatsSummary, advice: &str) -> String {
    let mut out = String::new();
    if stats.total_rounds == 0 {
        out.push_str("No Statistics Yet\nComplete a round to see your statistics\n\n");
    } else {
        let _ = writeln!(out, "Rounds: {}", stats.total_rounds);
        let _ = writeln!(out, "Holes: {}", stats.total_holes);
        let _ = writeln!(out, "Total Shots: {}", stats.total_shots());
        let _ = writeln!(
            out,
            "Avg Putts/Hole: {:.1}",
            stats.average_putts_per_hole()
        );
        out.push_str("\nShot Distribution\n");
        for point in shot_distribution(stats) {
            let _ = writeln!(out, "  {:<18} {:>5.1}%", point.shot.label(), point.value);
        }
        out.push_str("\nAverage Shots per Hole\n");
        for point in average_shots_per_hole(stats) {
            let _ = writeln!(out, "  {:<18} {:>5.2}", point.shot.label(), point.value);
        }
        out.push('\n');
    }
    out.push_str("Practice Suggestions\n");
    out.push_str(advice);
    out
}
