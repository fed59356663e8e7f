// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD availability checking utilities

use crate::constants::crd::{POLL_INTERVAL_SECS, POLL_MAX_INTERVAL_SECS};
use crate::error::Result;
use kube::{api::ApiResource, discovery::Discovery, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Block until the API server serves `resource`.
///
/// ArgoCD may be installed after this operator, so discovery is retried with a
/// doubling delay, capped at POLL_MAX_INTERVAL_SECS.
pub async fn wait_for_application_crd(client: &Client, resource: &ApiResource) -> Result<()> {
    let mut delay = Duration::from_secs(POLL_INTERVAL_SECS);
    let max_delay = Duration::from_secs(POLL_MAX_INTERVAL_SECS);

    while !is_served(client, resource).await {
        sleep(delay).await;
        delay = (delay * 2).min(max_delay);
    }

    info!(
        kind = %resource.kind,
        api_version = %resource.api_version,
        "ArgoCD resource is served, cleanup can start"
    );
    Ok(())
}

/// Discovery lookup, logging why the resource is not usable yet
async fn is_served(client: &Client, resource: &ApiResource) -> bool {
    match check_crd_exists(client, resource).await {
        Ok(served) => {
            if !served {
                info!(
                    kind = %resource.kind,
                    api_version = %resource.api_version,
                    "ArgoCD resource not installed yet, is ArgoCD deployed?"
                );
            }
            served
        }
        Err(e) => {
            warn!(kind = %resource.kind, "API discovery failed: {}", e);
            false
        }
    }
}

/// Whether discovery lists `resource` under its group's preferred version
async fn check_crd_exists(client: &Client, resource: &ApiResource) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[resource.group.as_str()])
        .run()
        .await?;

    let served = discovery
        .groups()
        .filter(|group| group.name() == resource.group)
        .flat_map(|group| group.recommended_resources())
        .any(|(ar, _)| ar.kind == resource.kind && ar.version == resource.version);

    Ok(served)
}
