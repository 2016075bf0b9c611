// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FARAWAY_LOG";

/// Routes tracing output to `path`; the terminal belongs to the UI.
pub fn init(path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow!("install log subscriber: {error}"))
}

fn env_filter(default_level: &str) -> Result<EnvFilter> {
    let directives = env::var(LOG_ENV).unwrap_or_else(|_| default_level.to_owned());
    EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log filter {directives:?}; set [log].level or {LOG_ENV}"))
}

#[cfg(test)]
mod tests {
    use super::env_filter;

    #[test]
    fn env_filter_accepts_levels_and_directives() {
        assert!(env_filter("info").is_ok());
        assert!(env_filter("faraway_app=debug,warn").is_ok());
    }

    #[test]
    fn env_filter_rejects_garbage() {
        let error = env_filter("faraway=notalevel").expect_err("bad directive should fail");
        assert!(error.to_string().contains("invalid log filter"));
    }
}
