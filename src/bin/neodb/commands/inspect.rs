use std::io::{self, Write};

use anyhow::{Context, Result};

use neo_db::NearEarthObject;

use crate::cli::{DataOptions, InspectArgs};
use crate::display::{Context as DisplayContext, Progress, print_neo_card};

use super::{LOAD_STEPS, load_database, show_database_summary};

pub fn run_inspect(args: InspectArgs, data: &DataOptions, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, LOAD_STEPS);
    let db = load_database(data, &mut progress)?;
    progress.finish("Database ready");
    show_database_summary(&db, ctx);

    let neo = match (&args.pdes, &args.name) {
        (Some(pdes), _) => db.get_neo_by_designation(pdes),
        (None, Some(name)) => db.get_neo_by_name(name),
        (None, None) => None,
    };

    let Some(neo) = neo else {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "No matching NEOs exist in the database.");
        return Ok(());
    };

    if ctx.interactive {
        print_neo_card(&db, neo);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_neo(&mut out, &db, neo, args.verbose_approaches).context("Failed to write to stdout")
}

fn write_neo(
    out: &mut impl Write,
    db: &neo_db::NeoDatabase,
    neo: &NearEarthObject,
    with_approaches: bool,
) -> io::Result<()> {
    writeln!(out, "{}", neo)?;

    if with_approaches {
        for approach in db.approaches_of(neo) {
            writeln!(out, "- {}", db.link(approach))?;
        }
    }

    out.flush()
}
