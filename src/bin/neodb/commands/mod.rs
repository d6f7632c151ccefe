mod inspect;
mod query;

use inspect::run_inspect;
use query::run_query;

use anyhow::{Context, Result};
use tracing::debug;

use neo_db::NeoDatabase;
use neo_db::io::{load_approaches, load_neos};

use crate::cli::{Command, DataOptions};
use crate::config::build_database_config;
use crate::display::{Context as DisplayContext, Progress, print_database_summary};
use crate::util::text::file_label;

/// Steps taken by [`load_database`].
const LOAD_STEPS: u8 = 3;

pub fn dispatch(command: Command, data: &DataOptions, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Inspect(args) => run_inspect(args, data, ctx),
        Command::Query(args) => run_query(args, data, ctx),
    }
}

/// Reads both inputs and links them, reporting each phase on `progress`.
fn load_database(data: &DataOptions, progress: &mut Progress) -> Result<NeoDatabase> {
    progress.step("Reading NEO catalog");
    let neos = load_neos(&data.neofile)
        .with_context(|| format!("Failed to load NEO catalog: {}", data.neofile.display()))?;
    progress.complete_step(
        "Reading NEO catalog",
        &[format!("{} NEOs from {}", neos.len(), file_label(&data.neofile))],
    );

    progress.step("Reading close approaches");
    let approaches = load_approaches(&data.cad).with_context(|| {
        format!("Failed to load close-approach data: {}", data.cad.display())
    })?;
    progress.complete_step(
        "Reading close approaches",
        &[format!(
            "{} approaches from {}",
            approaches.len(),
            file_label(&data.cad)
        )],
    );

    progress.step("Linking approaches to NEOs");
    let config = build_database_config(data);
    debug!(policy = ?config.duplicates, "building database");
    let db = NeoDatabase::with_config(neos, approaches, &config)
        .context("The NEO catalog failed an integrity check")?;

    let mut substeps = vec![format!(
        "{} of {} approaches linked",
        db.approach_count() - db.unresolved_count(),
        db.approach_count()
    )];
    if data.allow_duplicates {
        substeps.push("Duplicates resolved by keeping the last entry".to_string());
    }
    progress.complete_step("Linking approaches to NEOs", &substeps);

    Ok(db)
}

fn show_database_summary(db: &NeoDatabase, ctx: DisplayContext) {
    if ctx.interactive {
        print_database_summary(db);
    }
}
