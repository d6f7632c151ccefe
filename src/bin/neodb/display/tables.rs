use std::io::{self, Write};

use neo_db::query::Filter;
use neo_db::{NearEarthObject, NeoDatabase};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_database_summary(db: &NeoDatabase) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    print_kv_table(&mut out, "Database Summary", &summary_rows(db));
}

/// Counts cover canonical NEOs only; replaced duplicates show up as the
/// difference to "Catalog Rows".
fn summary_rows(db: &NeoDatabase) -> Vec<(&'static str, String)> {
    let named = db.canonical_neos().filter(|neo| neo.name.is_some()).count();
    let hazardous = db.canonical_neos().filter(|neo| neo.hazardous).count();

    let mut rows = vec![("NEOs", db.canonical_count().to_string())];
    if db.neo_count() != db.canonical_count() {
        rows.push(("Catalog Rows", db.neo_count().to_string()));
    }
    rows.extend([
        ("Named", named.to_string()),
        ("Hazardous", hazardous.to_string()),
        ("Close Approaches", db.approach_count().to_string()),
        ("Unlinked", db.unresolved_count().to_string()),
    ]);
    rows
}

pub fn print_neo_card(db: &NeoDatabase, neo: &NearEarthObject) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let diameter = neo
        .diameter
        .map(|d| format!("{:.3} km", d))
        .unwrap_or_else(|| "unknown".to_string());
    let mut rows = vec![
        ("Designation", neo.designation.clone()),
        ("Name", neo.name.clone().unwrap_or_else(|| "-".to_string())),
        ("Diameter", diameter),
        ("Hazardous", if neo.hazardous { "yes" } else { "no" }.to_string()),
        ("Approaches", neo.approach_count().to_string()),
    ];

    let mut approaches = db.approaches_of(neo);
    if let Some(first) = approaches.next() {
        let last = approaches.last().unwrap_or(first);
        rows.push(("First Approach", first.time_str()));
        rows.push(("Last Approach", last.time_str()));
    }

    print_kv_table(&mut out, &neo.full_name(), &rows);
}

pub fn print_query_summary(filters: &[Filter], limit: usize) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows: Vec<(&str, String)> = if filters.is_empty() {
        vec![("Filter", "none".to_string())]
    } else {
        filters.iter().map(|f| ("Filter", f.to_string())).collect()
    };
    let limit = if limit == 0 {
        "none".to_string()
    } else {
        limit.to_string()
    };
    rows.push(("Limit", limit));

    print_kv_table(&mut out, "Query", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);
    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}┌{}┬{}┐", INDENT, k_line, v_line);

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(out, "{}└{}┴{}┘", INDENT, k_line, v_line);
}
