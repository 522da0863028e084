// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GRIDEDIT_LOG";

/// `GRIDEDIT_LOG` wins over the configured directive.
pub fn resolve_directive(configured: &str) -> String {
    match env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => configured.to_owned(),
    }
}

pub fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| {
        format!("invalid log level {directive:?}; use a tracing filter such as \"info\" or \"gridedit_app=debug\"")
    })
}

pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| {
            format!(
                "open log file {} -- set [log].file to a writable path",
                path.display()
            )
        })
}

/// Installs the global subscriber. The terminal belongs to the grid, so
/// events go to the log file only.
pub fn init(filter: EnvFilter, file: File) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|error| anyhow!("install log subscriber: {error}"))
}

#[cfg(test)]
mod tests {
    use super::{LOG_ENV, build_filter, open_log_file, resolve_directive};
    use crate::env_lock;
    use anyhow::Result;
    use gridedit_testkit::temp_config_path;

    #[test]
    fn filters_accept_levels_and_targets() -> Result<()> {
        build_filter("info")?;
        build_filter("warn,gridedit_app=debug")?;
        Ok(())
    }

    #[test]
    fn env_directive_overrides_configured_level() {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var(LOG_ENV, "gridedit_app=trace");
        }
        let from_env = resolve_directive("info");

        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var(LOG_ENV, "   ");
        }
        let blank_env = resolve_directive("warn");

        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var(LOG_ENV);
        }
        let unset = resolve_directive("debug");

        assert_eq!(from_env, "gridedit_app=trace");
        assert_eq!(blank_env, "warn");
        assert_eq!(unset, "debug");
    }

    #[test]
    fn bad_filter_names_the_directive() {
        let error = build_filter("gridedit_app=loud").expect_err("bad level should fail");
        assert!(error.to_string().contains("gridedit_app=loud"));
    }

    #[test]
    fn log_file_parent_is_created() -> Result<()> {
        let (temp, _) = temp_config_path()?;
        let path = temp.path().join("nested").join("gridedit.log");
        open_log_file(&path)?;
        assert!(path.exists());
        Ok(())
    }
}
