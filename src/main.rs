use anyhow::{Context, Result, anyhow, bail};
use golf_shot_tracker::advice::{Advisor, RulesBasedAdvisor};
use golf_shot_tracker::args::{self, Command};
use golf_shot_tracker::model::{ProfileForm, format_score_to_par};
use golf_shot_tracker::storage::{RoundStore, SqliteStore};
use golf_shot_tracker::tracker::{
    HoleEdit, HoleTracker, discard_round, list_rounds, load_profile, load_round, new_round,
    purge_discarded_rounds, save_profile, update_hole,
};
use golf_shot_tracker::{compute_stats, view};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    let args = args::args_checks().map_err(|e| anyhow!(e))?;

    let store = match SqliteStore::open(&args.db_name) {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "{}",
                json!({"store":"open","db": args.db_name,"error": e.to_string()})
            );
            std::process::exit(1);
        }
    };

    if !args.combined_sql_script.is_empty() {
        store
            .execute_batch(&args.combined_sql_script)
            .context("run sql startup script")?;
    }

    run(args.command, &store).await
}

async fn run(command: Command, store: &dyn RoundStore) -> Result<()> {
    match command {
        Command::Profile {
            first_name,
            last_name,
            email,
            phone,
        } => {
            let form = ProfileForm {
                first_name,
                last_name,
                email,
                phone: phone.unwrap_or_default(),
            };
            let user = save_profile(store, &form)?;
            println!("Saved profile for {} <{}>.", user.display_name(), user.email);
        }
        Command::NewRound { course, holes } => {
            let user = load_profile(store);
            let round = new_round(store, &course, holes, user.as_ref())?;
            println!("Started round {} at {}.", round.id, round.course_name);
        }
        Command::Rounds => {
            println!("{}", view::render_round_list(&list_rounds(store)));
        }
        Command::Shot {
            round,
            hole,
            shot,
            decrement,
            times,
        } => {
            let mut tracker = HoleTracker::new(store, load_round(store, round)?);
            if !tracker.jump_to_hole(hole) {
                bail!("hole {hole} is not part of round {round}");
            }
            for _ in 0..times {
                if decrement {
                    tracker.decrement_shot(shot);
                } else {
                    tracker.increment_shot(shot);
                }
            }
            if let Some(current) = tracker.current_hole() {
                println!(
                    "Hole {} of {}: {} {}, {} strokes ({}). Round: {} ({}).",
                    current.hole_number,
                    tracker.round().holes_count.get(),
                    current.count(shot),
                    shot,
                    current.total_strokes(),
                    format_score_to_par(current.score_relative_to_par()),
                    tracker.round_total_strokes(),
                    format_score_to_par(tracker.round_score_relative_to_par()),
                );
            }
        }
        Command::Par { round, hole, par } => {
            let mut tracker = HoleTracker::new(store, load_round(store, round)?);
            if !tracker.jump_to_hole(hole) {
                bail!("hole {hole} is not part of round {round}");
            }
            tracker.set_par(par)?;
            println!("Hole {hole} is now par {par}.");
        }
        Command::SetHole {
            round,
            hole,
            par,
            drives,
            long_shots,
            approaches,
            chips,
            putts,
            fairway_bunker_shots,
            greenside_bunker_shots,
            penalties,
        } => {
            let mut current = load_round(store, round)?;
            let edit = HoleEdit {
                par,
                drives,
                long_shots,
                approaches,
                chips,
                putts,
                fairway_bunker_shots,
                greenside_bunker_shots,
                penalties,
            };
            update_hole(store, &mut current, hole, &edit)?;
            println!("{}", view::render_scorecard(&current));
        }
        Command::Scorecard { round } => {
            println!("{}", view::render_scorecard(&load_round(store, round)?));
        }
        Command::Discard { round } => {
            let remaining = discard_round(store, round);
            println!("Discarded round {round}. {} active round(s) left.", remaining.len());
        }
        Command::Purge => {
            let removed = purge_discarded_rounds(store);
            println!("Permanently deleted {removed} discarded round(s).");
        }
        Command::Stats { json } => {
            let stats = compute_stats(store);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&stats).context("serialize stats")?
                );
            } else {
                let advice = RulesBasedAdvisor::new().generate_advice(&stats).await;
                println!("{}", view::render_stats(&stats, &advice));
            }
        }
    }
    Ok(())
}
