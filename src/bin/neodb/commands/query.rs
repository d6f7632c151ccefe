use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use neo_db::LinkedApproach;
use neo_db::io::{Format, write_to_csv, write_to_json};
use neo_db::query::{create_filters, limit};

use crate::cli::{DataOptions, QueryArgs};
use crate::config::{build_criteria, build_limit};
use crate::display::{Context as DisplayContext, Progress, print_query_summary};
use crate::io::infer_output_format;
use crate::util::text::file_label;

use super::{LOAD_STEPS, load_database, show_database_summary};

struct OutputSpec {
    path: PathBuf,
    format: Format,
}

pub fn run_query(args: QueryArgs, data: &DataOptions, ctx: DisplayContext) -> Result<()> {
    let output = resolve_output(args.outfile.as_deref())?;
    let criteria = build_criteria(&args);
    let filters = create_filters(&criteria);
    let max_results = build_limit(&args);

    let total_steps = LOAD_STEPS + 1;
    let mut progress = Progress::new(ctx.interactive, total_steps);
    let db = load_database(data, &mut progress)?;

    show_database_summary(&db, ctx);
    if ctx.interactive {
        print_query_summary(&filters, args.limit);
    }

    let results = limit(db.query(&filters), max_results);

    let count = match &output {
        Some(spec) => {
            progress.step("Writing results");
            let count = write_output(results, spec)?;
            progress.complete_step(
                "Writing results",
                &[format!("{} rows as {} → {}", count, spec.format, file_label(&spec.path))],
            );
            count
        }
        None => {
            progress.step("Selecting close approaches");
            let lines: Vec<String> = results.map(|linked| linked.to_string()).collect();
            progress.complete_step(
                "Selecting close approaches",
                &[format!("{} matching approaches", lines.len())],
            );
            print_lines(&lines).context("Failed to write to stdout")?;
            lines.len()
        }
    };

    info!(results = count, filters = filters.len(), "query finished");
    progress.finish(&format!("{} results", count));

    Ok(())
}

fn resolve_output(path: Option<&Path>) -> Result<Option<OutputSpec>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let Some(format) = infer_output_format(path) else {
        bail!(
            "Cannot infer output format from extension of '{}'. Use .csv or .json.",
            path.display()
        );
    };

    Ok(Some(OutputSpec {
        path: path.to_path_buf(),
        format,
    }))
}

fn write_output<'a, I>(results: I, spec: &OutputSpec) -> Result<usize>
where
    I: IntoIterator<Item = LinkedApproach<'a>>,
{
    let written = match spec.format {
        Format::Csv => write_to_csv(results, &spec.path),
        Format::Json => write_to_json(results, &spec.path),
    };

    written.with_context(|| format!("Failed to write results to {}", spec.path.display()))
}

fn print_lines(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
