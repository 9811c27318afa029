//! Run one team draw from the command line and print the result as JSON.
//! Run with: cargo run --bin draw
//! Reads groups and selections from CATALOG (default catalog.json).
//! Options come from env: GROUP_ID, SELECTION_ID, TEAMS_PER_PARTICIPANT,
//! GAMEPLAY_MODE (single|pair), ALLOW_REPEATS (true|false). SEED makes the draw reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use team_draw::{run_catalog_draw, Catalog, DrawForm, DrawOptions, PLACEHOLDER};

fn default_catalog() -> String {
    "catalog.json".to_string()
}

fn form_field(var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| PLACEHOLDER.to_string())
}

fn form_from_env() -> DrawForm {
    DrawForm {
        group_id: form_field("GROUP_ID"),
        selection_id: form_field("SELECTION_ID"),
        teams_per_participant: form_field("TEAMS_PER_PARTICIPANT"),
        gameplay_mode: form_field("GAMEPLAY_MODE"),
        allow_repeats: form_field("ALLOW_REPEATS"),
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let catalog_path = std::env::var("CATALOG").unwrap_or_else(|_| default_catalog());
    let catalog = match std::fs::read_to_string(&catalog_path)
        .map_err(|e| e.to_string())
        .and_then(|json| Catalog::from_json_str(&json).map_err(|e| e.to_string()))
    {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load catalog {}: {}", catalog_path, e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Loaded {} group(s) and {} selection(s) from {}",
        catalog.groups.len(),
        catalog.selections.len(),
        catalog_path
    );

    let form = form_from_env();
    if !form.is_complete() {
        log::error!("Draw options not set: {}", form.missing_fields().join(", "));
        return ExitCode::FAILURE;
    }
    let options = match DrawOptions::try_from(&form) {
        Ok(o) => o,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed: Option<u64> = std::env::var("SEED").ok().and_then(|s| s.parse().ok());
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let Some(outcome) = run_catalog_draw(&options, &catalog, &mut rng) else {
        log::info!("Nothing drawn: pick a non-empty group and selection");
        return ExitCode::SUCCESS;
    };

    for p in &outcome.participants {
        log::info!("{}: {}", p.display_name, p.drawn_teams.join(", "));
    }
    match serde_json::to_string_pretty(&outcome.result) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize draw result: {}", e);
            ExitCode::FAILURE
        }
    }
}
