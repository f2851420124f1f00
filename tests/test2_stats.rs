mod common;

use common::{FailingStore, played_round, summary};
use golf_shot_tracker::model::{HolesCount, ShotType, StatsSummary};
use golf_shot_tracker::stats::{average_shots_per_hole, shot_distribution};
use golf_shot_tracker::{MemoryStore, RoundStore, compute_stats, summarize_rounds};

#[test]
fn test2_no_rounds_gives_all_zero_summary() {
    let store = MemoryStore::new();
    let stats = compute_stats(&store);

    assert_eq!(stats, StatsSummary::default());
    assert_eq!(stats.total_shots(), 0);
    assert_eq!(stats.average_drives_per_hole(), 0.0);
    assert_eq!(stats.average_approaches_per_hole(), 0.0);
    assert_eq!(stats.average_chips_per_hole(), 0.0);
    assert_eq!(stats.average_putts_per_hole(), 0.0);
    for shot in ShotType::ALL {
        assert_eq!(stats.percentage(shot), 0.0);
    }
    assert_eq!(stats.penalties_percentage(), 0.0);
}

#[test]
fn test2_sums_every_hole_of_active_rounds() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();
    store.insert_round(&played_round(
        "Front",
        HolesCount::Nine,
        [1, 1, 1, 1, 2, 0, 0, 0],
    ))?;
    store.insert_round(&played_round(
        "Links",
        HolesCount::Eighteen,
        [1, 0, 1, 0, 2, 1, 1, 1],
    ))?;
    let discarded = played_round("Muni", HolesCount::Eighteen, [5, 5, 5, 5, 5, 5, 5, 5]);
    store.insert_round(&discarded)?;
    store.mark_round_discarded(discarded.id)?;

    let stats = compute_stats(&store);
    assert_eq!(stats.total_rounds, 2);
    assert_eq!(stats.total_holes, 27);
    assert_eq!(stats.total_drives, 27);
    assert_eq!(stats.total_long_shots, 9);
    assert_eq!(stats.total_approaches, 27);
    assert_eq!(stats.total_chips, 9);
    assert_eq!(stats.total_putts, 54);
    assert_eq!(stats.total_fairway_bunker_shots, 18);
    assert_eq!(stats.total_greenside_bunker_shots, 18);
    assert_eq!(stats.total_penalties, 18);
    assert_eq!(stats.total_shots(), 180);

    Ok(())
}

#[test]
fn test2_compute_stats_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();
    store.insert_round(&played_round(
        "Front",
        HolesCount::Nine,
        [1, 0, 2, 1, 2, 0, 1, 0],
    ))?;

    let first = compute_stats(&store);
    let second = compute_stats(&store);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test2_round_order_does_not_change_totals() {
    let a = played_round("A", HolesCount::Nine, [1, 2, 0, 1, 2, 0, 0, 1]);
    let b = played_round("B", HolesCount::Eighteen, [1, 0, 1, 0, 3, 1, 0, 0]);

    assert_eq!(
        summarize_rounds(&[a.clone(), b.clone()]),
        summarize_rounds(&[b, a])
    );
}

#[test]
fn test2_unreadable_store_counts_as_empty() {
    assert_eq!(compute_stats(&FailingStore), StatsSummary::default());
}

#[test]
fn test2_derived_averages_and_percentages() {
    let stats = summary(1, 4, [4, 0, 4, 4, 8, 0, 0, 0]);

    assert_eq!(stats.total_shots(), 20);
    assert_eq!(stats.average_drives_per_hole(), 1.0);
    assert_eq!(stats.average_approaches_per_hole(), 1.0);
    assert_eq!(stats.average_chips_per_hole(), 1.0);
    assert_eq!(stats.average_putts_per_hole(), 2.0);
    assert_eq!(stats.putts_percentage(), 40.0);
    assert_eq!(stats.drives_percentage(), 20.0);
    assert_eq!(stats.approaches_percentage(), 20.0);
    assert_eq!(stats.chips_percentage(), 20.0);
    assert_eq!(stats.long_shots_percentage(), 0.0);
    assert_eq!(stats.fairway_bunker_shots_percentage(), 0.0);
    assert_eq!(stats.greenside_bunker_shots_percentage(), 0.0);

    // holes but no shots
    let idle = summary(1, 9, [0; 8]);
    assert_eq!(idle.putts_percentage(), 0.0);
    assert_eq!(idle.average_putts_per_hole(), 0.0);
}

#[test]
fn test2_chart_data() {
    let stats = summary(1, 4, [4, 2, 4, 2, 8, 0, 0, 0]);

    let distribution = shot_distribution(&stats);
    assert_eq!(distribution.len(), 8);
    let total: f64 = distribution.iter().map(|p| p.value).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert_eq!(distribution[4].shot, ShotType::Putts);
    assert_eq!(distribution[4].value, 40.0);

    let averages = average_shots_per_hole(&stats);
    assert_eq!(averages[0].value, 1.0);
    assert_eq!(averages[1].shot, ShotType::LongShots);
    assert_eq!(averages[1].value, 0.5);
    assert_eq!(averages[4].value, 2.0);

    let empty = average_shots_per_hole(&StatsSummary::default());
    assert!(empty.iter().all(|p| p.value == 0.0));
}

#[test]
fn test2_summary_serializes_as_plain_record() -> Result<(), Box<dyn std::error::Error>> {
    let stats = summary(2, 18, [18, 3, 15, 6, 33, 1, 2, 1]);
    let value = serde_json::to_value(stats)?;
    assert_eq!(value["total_rounds"], 2);
    assert_eq!(value["total_putts"], 33);
    assert_eq!(value["total_penalties"], 1);

    let back: StatsSummary = serde_json::from_value(value)?;
    assert_eq!(back, stats);
    Ok(())
}
