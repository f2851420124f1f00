use serde::{Deserialize, Serialize};

use super::hole::Hole;
use super::round::Round;

/// One scorecard line, as shown for a hole in the round detail.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LineScore {
    pub hole: u32,
    pub par: u32,
    pub strokes: u64,
    pub score_to_par: i64,
    pub score_display: ScoreDisplay,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    NotPlayed,
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    Worse,
}

impl ScoreDisplay {
    #[must_use]
    pub fn for_hole(hole: &Hole) -> Self {
        if hole.total_strokes() == 0 {
            return ScoreDisplay::NotPlayed;
        }
        Self::from_relative(hole.score_relative_to_par())
    }

    #[must_use]
    pub fn from_relative(score_to_par: i64) -> Self {
        match score_to_par {
            i64::MIN..=-4 => ScoreDisplay::Condor,
            -3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            3 => ScoreDisplay::TripleBogey,
            _ => ScoreDisplay::Worse,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreDisplay::NotPlayed => "-",
            ScoreDisplay::Condor => "Condor",
            ScoreDisplay::Albatross => "Albatross",
            ScoreDisplay::Eagle => "Eagle",
            ScoreDisplay::Birdie => "Birdie",
            ScoreDisplay::Par => "Par",
            ScoreDisplay::Bogey => "Bogey",
            ScoreDisplay::DoubleBogey => "Double Bogey",
            ScoreDisplay::TripleBogey => "Triple Bogey",
            ScoreDisplay::Worse => "Other",
        }
    }
}

/// "+3" over par, "0" level, "-2" under.
#[must_use]
pub fn format_score_to_par(score_to_par: i64) -> String {
    if score_to_par > 0 {
        format!("+{score_to_par}")
    } else {
        score_to_par.to_string()
    }
}

#[must_use]
pub fn line_scores(round: &Round) -> Vec<LineScore> {
    round
        .holes
        .iter()
        .map(|hole| LineScore {
            hole: hole.hole_number,
            par: hole.par,
            strokes: hole.total_strokes(),
            score_to_par: hole.score_relative_to_par(),
            score_display: ScoreDisplay::for_hole(hole),
        })
        .collect()
}
