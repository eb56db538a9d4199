//! Decode one raw table stream and print its rows.
//!
//! The file must hold a single table payload already extracted from the
//! BK3 compound document (for example with a CFB browser).
//!
//! Usage: table_dump <path_to_table> [--json]
//! Output: one `{NAME=value, ...}` line per row, or the whole table as JSON

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use openplan_table::TableReader;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (path, json) = match args.as_slice() {
        [path] => (path, false),
        [path, flag] if flag == "--json" => (path, true),
        _ => bail!("Usage: table_dump <path_to_table> [--json]"),
    };

    let path = Path::new(path);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let table = TableReader::new(name, BufReader::new(file))
        .read()
        .with_context(|| format!("Failed to decode table {}", path.display()))?;

    if json {
        let text = serde_json::to_string_pretty(&table).context("Failed to serialize table")?;
        println!("{}", text);
        return Ok(());
    }

    println!("=== {} ({} rows) ===", table.name(), table.len());
    println!("Columns: {}", table.columns().join(", "));
    for row in &table {
        println!("{}", row);
    }

    Ok(())
}
