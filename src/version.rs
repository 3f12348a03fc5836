use chrono::{Datelike, NaiveDate, Utc};
use serde_json;
use std::fs;
use std::io;
use std::path::Path;

/// Compute the bundle build string for a date
///
/// The format is `2.0.<years>.<MMDD>.0` where `<years>` counts years since
/// 2000 and month and day are zero-padded to two digits.
pub fn build_string(date: NaiveDate) -> String {
    let years = date.year() - 2000;
    format!("2.0.{}.{:02}{:02}.0", years, date.month(), date.day())
}

/// Overwrite the `version` field of a package config file in place
///
/// Every other key is preserved in its original order, and the file is
/// rewritten with two-space indentation.
pub fn bump_version_file(config_path: &Path, build: &str) -> io::Result<()> {
    let contents = fs::read_to_string(config_path)?;

    let mut config: serde_json::Value = serde_json::from_str(&contents).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse {}: {}", config_path.display(), e),
        )
    })?;

    let fields = config.as_object_mut().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} must contain a JSON object", config_path.display()),
        )
    })?;
    fields.insert(
        "version".to_string(),
        serde_json::Value::String(build.to_string()),
    );

    let new_contents = serde_json::to_string_pretty(&config).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to serialize config: {}", e),
        )
    })?;
    fs::write(config_path, new_contents)?;

    Ok(())
}

/// Bump the package config version using the current UTC date
pub fn bump(config_path: &str) -> io::Result<()> {
    let build = build_string(Utc::now().date_naive());
    println!("New version: {}", build);

    bump_version_file(Path::new(config_path), &build)?;

    println!("Updated {}", config_path);
    Ok(())
}
