// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::error::{CleanupError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::DeleteParams, Api, Client};
use tracing::{debug, info, instrument};

/// Request deletion of a namespace. A namespace that is already gone counts as deleted.
#[instrument(skip(client))]
pub async fn delete_namespace(client: &Client, namespace: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.delete(namespace, &DeleteParams::default()).await {
        Ok(_) => {
            info!("Deletion of namespace {} requested", namespace);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("Namespace {} already deleted", namespace);
            Ok(())
        }
        Err(e) => Err(CleanupError::NamespaceError {
            namespace: namespace.to_string(),
            source: e,
        }),
    }
}
