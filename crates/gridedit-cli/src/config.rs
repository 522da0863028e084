// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use gridedit_app::{
    DEFAULT_ADDRESS_PREFIX, DEFAULT_AGE, DEFAULT_NAME_PREFIX, Record, RowStore, RowTemplate,
    default_seed_records,
};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "gridedit";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "info";
const CONFIG_PATH_ENV: &str = "GRIDEDIT_CONFIG_PATH";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub grid: Grid,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            grid: Grid::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Grid {
    pub name_prefix: Option<String>,
    pub address_prefix: Option<String>,
    pub default_age: Option<String>,
    /// Absent means the two built-in rows; an empty list starts blank.
    pub seed: Option<Vec<Record>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {CONFIG_PATH_ENV} to the config file")
        })?;
        Ok(config_root.join(APP_NAME).join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no version; add `version = 1` at the top and put values under [grid] and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        for (key, value) in [
            ("grid.name_prefix", &self.grid.name_prefix),
            ("grid.default_age", &self.grid.default_age),
            ("log.level", &self.log.level),
            ("log.file", &self.log.file),
        ] {
            if let Some(value) = value
                && value.trim().is_empty()
            {
                bail!(
                    "{key} in {} must not be blank; remove the line to use the default",
                    path.display()
                );
            }
        }

        self.build_store()
            .with_context(|| format!("invalid [[grid.seed]] rows in {}", path.display()))?;
        Ok(())
    }

    pub fn row_template(&self) -> RowTemplate {
        RowTemplate {
            name_prefix: self
                .grid
                .name_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_NAME_PREFIX.to_owned()),
            address_prefix: self
                .grid
                .address_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_ADDRESS_PREFIX.to_owned()),
            age: self
                .grid
                .default_age
                .clone()
                .unwrap_or_else(|| DEFAULT_AGE.to_owned()),
        }
    }

    pub fn build_store(&self) -> Result<RowStore> {
        let seed = match &self.grid.seed {
            Some(rows) => rows.clone(),
            None => default_seed_records(),
        };
        RowStore::with_seed(seed, self.row_template())
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(file) = &self.log.file {
            return Ok(PathBuf::from(file));
        }
        let data_root = dirs::data_dir().ok_or_else(|| {
            anyhow!("cannot resolve data directory; set [log].file in the config")
        })?;
        Ok(data_root.join(APP_NAME).join(format!("{APP_NAME}.log")))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# gridedit config\n# Place this file at: {}\n\nversion = 1\n\n[grid]\n# Rows added with `a` are named \"<name_prefix> <n>\".\nname_prefix = \"{DEFAULT_NAME_PREFIX}\"\naddress_prefix = \"{DEFAULT_ADDRESS_PREFIX}\"\ndefault_age = \"{DEFAULT_AGE}\"\n\n# Optional. Omit to start with the two built-in rows.\n# [[grid.seed]]\n# key = \"1\"\n# name = \"{DEFAULT_NAME_PREFIX} 1\"\n# age = \"{DEFAULT_AGE}\"\n# address = \"{DEFAULT_ADDRESS_PREFIX}\"\n\n[log]\n# tracing filter directive; GRIDEDIT_LOG overrides it\nlevel = \"{DEFAULT_LOG_LEVEL}\"\n# Optional. Default is platform data dir (for example ~/.local/share/gridedit/gridedit.log)\n# file = \"/absolute/path/to/gridedit.log\"\n",
            path.display(),
        )
    }
}
