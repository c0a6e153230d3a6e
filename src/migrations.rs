//! Migration file management.
//!
//! Migrations live in the migrations directory as timestamped .sql files.
//! Each file carries an up and a down section. Applying them is left to the
//! project that adopts this template, so the CLI only lists and generates.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

pub const MIGRATION_EXT: &str = "sql";

/// Names of the migration files in `dir`, sorted so the filename timestamps
/// give the creation order. A missing directory reads as empty.
pub fn list_migrations(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("reading migrations dir {}", dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() || path.extension() != Some(MIGRATION_EXT.as_ref()) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push(name.to_string());
        }
    }
    files.sort();
    Ok(files)
}

/// Write a templated migration named `<YYYYMMDDHHMMSS>_<name>.sql` into `dir`,
/// creating the directory if needed, and return the path of the new file.
pub fn generate(dir: &Path, name: &str) -> Result<PathBuf> {
    let now = Utc::now();
    let filename = format!("{}_{}.{}", now.format("%Y%m%d%H%M%S"), name, MIGRATION_EXT);
    let filepath = dir.join(filename);

    fs::create_dir_all(dir)
        .with_context(|| format!("creating migrations dir {}", dir.display()))?;
    fs::write(&filepath, template(name))
        .with_context(|| format!("writing {}", filepath.display()))?;

    Ok(filepath)
}

fn template(name: &str) -> String {
    format!(
        "-- Migration: {name}\n\
         -- Created: {created}\n\
         \n\
         -- migrate:up\n\
         -- CREATE TABLE IF NOT EXISTS ...;\n\
         \n\
         -- migrate:down\n\
         -- DROP TABLE IF EXISTS ...;\n",
        name = name,
        created = Utc::now().to_rfc3339(),
    )
}
