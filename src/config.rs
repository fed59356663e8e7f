// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::env;
use std::time::Duration;

/// A single cleanup controller: the name it registers under and the finalizer it owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupRegistration {
    pub controller_name: String,
    pub finalizer: String,
}

impl CleanupRegistration {
    pub fn new(controller_name: impl Into<String>, finalizer: impl Into<String>) -> Self {
        Self {
            controller_name: controller_name.into(),
            finalizer: finalizer.into(),
        }
    }
}

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// One reconciler is started per registration
    pub registrations: Vec<CleanupRegistration>,
    /// Only watch Applications in this namespace when set
    pub watch_namespace: Option<String>,
    pub error_requeue: Duration,
    pub reconcile_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            registrations: default_registrations(),
            watch_namespace: None,
            error_requeue: Duration::from_secs(defaults::ERROR_REQUEUE_SECS),
            reconcile_timeout: Duration::from_secs(defaults::RECONCILE_TIMEOUT_SECS),
        }
    }
}

fn default_registrations() -> Vec<CleanupRegistration> {
    vec![
        CleanupRegistration::new(defaults::CONTROLLER_NAME, defaults::FINALIZER),
        CleanupRegistration::new(defaults::ARGO_CONTROLLER_NAME, defaults::ARGO_FINALIZER),
    ]
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let registrations = match lookup("CLEANUP_REGISTRATIONS") {
            Some(raw) => parse_registrations(&raw).context("Invalid CLEANUP_REGISTRATIONS")?,
            None => default_registrations(),
        };

        let watch_namespace = lookup("WATCH_NAMESPACE")
            .map(|ns| ns.trim().to_string())
            .filter(|ns| !ns.is_empty());

        let error_requeue = parse_seconds(
            "ERROR_REQUEUE_SECS",
            lookup("ERROR_REQUEUE_SECS"),
            defaults::ERROR_REQUEUE_SECS,
        )?;
        let reconcile_timeout = parse_seconds(
            "RECONCILE_TIMEOUT_SECS",
            lookup("RECONCILE_TIMEOUT_SECS"),
            defaults::RECONCILE_TIMEOUT_SECS,
        )?;

        Ok(Config {
            registrations,
            watch_namespace,
            error_requeue,
            reconcile_timeout,
        })
    }
}

/// Parse `controller-name=finalizer` pairs separated by commas
fn parse_registrations(raw: &str) -> Result<Vec<CleanupRegistration>> {
    let mut registrations = Vec::new();
    let mut seen = HashSet::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((name, finalizer)) = entry.split_once('=') else {
            bail!("expected controller-name=finalizer, got '{}'", entry);
        };
        let (name, finalizer) = (name.trim(), finalizer.trim());
        if name.is_empty() || finalizer.is_empty() {
            bail!("empty controller name or finalizer in '{}'", entry);
        }
        if !seen.insert(name.to_string()) {
            bail!("duplicate controller name '{}'", name);
        }
        registrations.push(CleanupRegistration::new(name, finalizer));
    }

    if registrations.is_empty() {
        bail!("at least one registration is required");
    }

    Ok(registrations)
}

fn parse_seconds(key: &str, value: Option<String>, default: u64) -> Result<Duration> {
    let secs = match value {
        Some(v) => v
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{} must be a whole number of seconds, got '{}'", key, v))?,
        None => default,
    };
    if secs == 0 {
        bail!("{} must be greater than zero", key);
    }
    Ok(Duration::from_secs(secs))
}
