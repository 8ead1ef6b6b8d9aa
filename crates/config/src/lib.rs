//! Configuration models and loaders for well catalogs.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Well record parsed from catalog manifests.
#[derive(Debug, Deserialize, Clone)]
pub struct WellConfig {
    pub name: String,
    pub units: UnitsConfig,
    pub profile: ProfileConfig,
}

/// Measurement system declared by a catalog record.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitsConfig {
    Field,
    Metric,
}

/// Profile parameters in catalog manifests.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ProfileConfig {
    #[serde(rename = "j")]
    J {
        tvd: f64,
        kop: f64,
        build_rate: f64,
        displacement: f64,
    },
    #[serde(rename = "s")]
    S {
        tvd: f64,
        kop: f64,
        build_rate: f64,
        drop_rate: f64,
        displacement: f64,
    },
    #[serde(rename = "h")]
    H {
        tvd: f64,
        kop: f64,
        build_rate: f64,
        landing_rate: f64,
        displacement: f64,
    },
    #[serde(other)]
    Unsupported,
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load well records from a YAML file, a single TOML record, or a directory
/// of TOML records.
pub fn load_wells<P: AsRef<Path>>(path: P) -> Result<Vec<WellConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
