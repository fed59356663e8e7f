// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Application cleanup reconciler - deletes the destination namespace of an
//! Application being deleted, then releases the Application's finalizer.

use crate::config::{CleanupRegistration, Config};
use crate::error::{CleanupError, Result};
use crate::kubernetes::delete_namespace;
use crate::types::application::{self, Application};
use futures::StreamExt;
use kube::{
    api::{ApiResource, DynamicObject, PostParams},
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// What a cleanup pass did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// The Application no longer exists
    NotFound,
    /// Not being deleted, or not carrying our finalizer
    Skipped,
    /// Namespace deletion requested and finalizer removed
    Cleaned { namespace: String },
}

pub struct ApplicationCleanupReconciler {
    client: Client,
    config: Config,
    registration: CleanupRegistration,
    resource: ApiResource,
}

impl ApplicationCleanupReconciler {
    pub fn new(client: Client, config: Config, registration: CleanupRegistration) -> Self {
        Self {
            client,
            config,
            registration,
            resource: application::api_resource(),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let applications: Api<DynamicObject> = match &self.config.watch_namespace {
            Some(ns) => Api::namespaced_with(self.client.clone(), ns, &self.resource),
            None => Api::all_with(self.client.clone(), &self.resource),
        };
        let resource = self.resource.clone();
        let controller_name = self.registration.controller_name.clone();

        info!(
            controller = %controller_name,
            finalizer = %self.registration.finalizer,
            "Starting Application cleanup controller"
        );

        let context = Arc::new(self);

        Controller::new_with(applications, WatcherConfig::default(), resource)
            .shutdown_on_signal()
            .run(reconcile, error_policy, context)
            .for_each(|res| {
                let controller_name = controller_name.clone();
                async move {
                    match res {
                        Ok(o) => debug!(controller = %controller_name, "Reconciled application: {:?}", o),
                        Err(e) => warn!(controller = %controller_name, "Reconciliation error: {:?}", e),
                    }
                }
            })
            .await;

        info!(controller = %controller_name, "Application cleanup controller stopped");
        Ok(())
    }

    /// Run one cleanup pass for the Application `namespace/name`.
    ///
    /// The finalizer is only removed once the destination namespace deletion has been
    /// requested or the namespace is already gone. Every step is safe to repeat.
    #[instrument(
        skip(self),
        fields(
            controller = %self.registration.controller_name,
            finalizer = %self.registration.finalizer
        )
    )]
    pub async fn cleanup(&self, namespace: &str, name: &str) -> Result<CleanupOutcome> {
        let finalizer = self.registration.finalizer.as_str();
        let applications: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, &self.resource);

        let app = match applications.get_opt(name).await {
            Ok(Some(obj)) => Application::from(obj),
            Ok(None) => {
                debug!("Application not found, nothing to clean up");
                return Ok(CleanupOutcome::NotFound);
            }
            Err(e) => {
                return Err(CleanupError::FetchError {
                    key: format!("{}/{}", namespace, name),
                    source: e,
                })
            }
        };

        if !app.is_deleting() || !app.has_finalizer(finalizer) {
            debug!("Skipping, not being deleted or finalizer not present");
            return Ok(CleanupOutcome::Skipped);
        }

        info!("Processing namespace cleanup finalizer");

        let target = app.destination_namespace()?;
        delete_namespace(&self.client, &target).await?;

        let updated = app.without_finalizer(finalizer);
        applications
            .replace(name, &PostParams::default(), &updated)
            .await
            .map_err(|e| CleanupError::FinalizerError {
                finalizer: finalizer.to_string(),
                source: e,
            })?;

        info!(namespace = %target, "Successfully processed finalizer");
        Ok(CleanupOutcome::Cleaned { namespace: target })
    }
}

async fn reconcile(
    app: Arc<DynamicObject>,
    ctx: Arc<ApplicationCleanupReconciler>,
) -> Result<Action> {
    let namespace = app.namespace().unwrap_or_default();
    let name = app.name_any();
    let timeout = ctx.config.reconcile_timeout;

    let outcome = tokio::time::timeout(timeout, ctx.cleanup(&namespace, &name))
        .await
        .map_err(|_| CleanupError::Timeout(timeout))??;

    debug!("Application {}/{}: {:?}", namespace, name, outcome);

    // Nothing to poll for, the watcher reports the next change or the deletion
    Ok(Action::await_change())
}

fn error_policy(
    app: Arc<DynamicObject>,
    error: &CleanupError,
    ctx: Arc<ApplicationCleanupReconciler>,
) -> Action {
    error!(
        controller = %ctx.registration.controller_name,
        "Reconciliation of {}/{} failed: {}",
        app.namespace().unwrap_or_default(),
        app.name_any(),
        error
    );
    Action::requeue(ctx.config.error_requeue)
}
