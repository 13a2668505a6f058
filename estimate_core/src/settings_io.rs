//! # Settings Files
//!
//! [`EstimateSettings`] persisted as JSON with a schema `version` field.
//! Saves are atomic: write `.tmp`, verify it parses back, then rename.
//!
//! ```rust,no_run
//! use estimate_core::config::EstimateSettings;
//! use estimate_core::settings_io::{load_settings, save_settings};
//! use std::path::Path;
//!
//! let path = Path::new("estimate.json");
//! save_settings(&EstimateSettings::default(), path).unwrap();
//! let settings = load_settings(path).unwrap();
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::EstimateSettings;
use crate::errors::{CalcError, CalcResult};

/// Current settings file schema version
pub const SETTINGS_VERSION: &str = "1.0";

#[derive(Debug, Serialize, Deserialize)]
struct SettingsFile {
    version: String,
    #[serde(flatten)]
    settings: EstimateSettings,
}

/// Write settings to `path` atomically.
pub fn save_settings(settings: &EstimateSettings, path: &Path) -> CalcResult<()> {
    settings.validate()?;

    let file = SettingsFile {
        version: SETTINGS_VERSION.to_string(),
        settings: settings.clone(),
    };
    let json = serde_json::to_string_pretty(&file)?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    // Verify before replacing the old file
    if let Err(e) = read_settings_file(&tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), "saved settings");
    Ok(())
}

/// Read settings from `path`, checking the schema version.
pub fn load_settings(path: &Path) -> CalcResult<EstimateSettings> {
    let settings = read_settings_file(path)?;
    settings.validate()?;
    tracing::debug!(path = %path.display(), unit_system = %settings.unit_system, "loaded settings");
    Ok(settings)
}

fn read_settings_file(path: &Path) -> CalcResult<EstimateSettings> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let parsed: SettingsFile =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&parsed.version)?;
    Ok(parsed.settings)
}

/// Major versions must match; a newer minor version is rejected.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SETTINGS_VERSION.to_string(),
    };

    let parse = |v: &str| -> Option<(u32, u32)> {
        let mut parts = v.split('.').map(|p| p.parse::<u32>());
        let major = parts.next()?.ok()?;
        let minor = match parts.next() {
            Some(p) => p.ok()?,
            None => 0,
        };
        Some((major, minor))
    };

    let (file_major, file_minor) = parse(file_version).ok_or_else(mismatch)?;
    let (major, minor) = parse(SETTINGS_VERSION).ok_or_else(mismatch)?;

    if file_major != major || file_minor > minor {
        return Err(mismatch());
    }
    Ok(())
}
