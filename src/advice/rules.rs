use async_trait::async_trait;

use super::Advisor;
use crate::model::StatsSummary;

pub const NO_ROUNDS_MESSAGE: &str =
    "Start tracking your rounds to receive personalized practice suggestions!";
pub const ENCOURAGEMENT_MESSAGE: &str = "Keep up the great work! Your shot distribution looks balanced. Continue practicing all aspects of your game.";
pub const DISTANCE_CONTROL_MESSAGE: &str = "Your approach shots are relatively low. Work on distance control and accuracy from 100 yards and in.";
pub const TEE_SHOT_MESSAGE: &str = "You're averaging more than one drive per hole. Focus on keeping your tee shots in play to avoid penalty strokes.";

/// Trigger points for each practice rule. Every comparison is strict.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdviceThresholds {
    pub putts_percentage: f64,
    pub putts_per_hole: f64,
    pub chips_percentage: f64,
    pub approaches_percentage: f64,
    /// Approach rule needs more rounds than this before it can fire.
    pub approaches_min_rounds: u64,
    pub drives_per_hole: f64,
}

impl Default for AdviceThresholds {
    fn default() -> Self {
        Self {
            putts_percentage: 40.0,
            putts_per_hole: 2.5,
            chips_percentage: 25.0,
            approaches_percentage: 15.0,
            approaches_min_rounds: 3,
            drives_per_hole: 1.2,
        }
    }
}

#[must_use]
pub fn putting_share_message(putts_percentage: f64) -> String {
    format!(
        "Putting accounts for {putts_percentage:.1}% of your shots. Consider allocating more practice time to putting to lower your scores."
    )
}

#[must_use]
pub fn putts_per_hole_message(average_putts: f64) -> String {
    format!(
        "Your average of {average_putts:.1} putts per hole suggests room for improvement on the green."
    )
}

#[must_use]
pub fn chipping_message(chips_percentage: f64) -> String {
    format!(
        "You're taking many chip shots ({chips_percentage:.1}% of total). Focus on approach accuracy to get closer to the pin and reduce chip shots."
    )
}

/// Practice suggestions for `stats` under the default thresholds.
#[must_use]
pub fn generate_advice(stats: &StatsSummary) -> String {
    generate_advice_with(stats, &AdviceThresholds::default())
}

#[must_use]
pub fn generate_advice_with(stats: &StatsSummary, thresholds: &AdviceThresholds) -> String {
    if stats.total_rounds == 0 {
        return NO_ROUNDS_MESSAGE.to_string();
    }

    let mut suggestions: Vec<String> = Vec::new();

    if stats.putts_percentage() > thresholds.putts_percentage {
        suggestions.push(putting_share_message(stats.putts_percentage()));
    } else if stats.average_putts_per_hole() > thresholds.putts_per_hole {
        suggestions.push(putts_per_hole_message(stats.average_putts_per_hole()));
    }

    if stats.chips_percentage() > thresholds.chips_percentage {
        suggestions.push(chipping_message(stats.chips_percentage()));
    }

    if stats.approaches_percentage() < thresholds.approaches_percentage
        && stats.total_rounds > thresholds.approaches_min_rounds
    {
        suggestions.push(DISTANCE_CONTROL_MESSAGE.to_string());
    }

    if stats.average_drives_per_hole() > thresholds.drives_per_hole {
        suggestions.push(TEE_SHOT_MESSAGE.to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(ENCOURAGEMENT_MESSAGE.to_string());
    }

    suggestions.join("\n\n")
}

#[derive(Clone, Debug, Default)]
pub struct RulesBasedAdvisor {
    thresholds: AdviceThresholds,
}

impl RulesBasedAdvisor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_thresholds(thresholds: AdviceThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn thresholds(&self) -> &AdviceThresholds {
        &self.thresholds
    }
}

#[async_trait]
impl Advisor for RulesBasedAdvisor {
    async fn generate_advice(&self, stats: &StatsSummary) -> String {
        generate_advice_with(stats, &self.thresholds)
    }
}
