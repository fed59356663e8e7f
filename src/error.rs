// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to fetch Application {key}: {source}")]
    FetchError {
        key: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to get namespace from spec.destination.namespace: {0}")]
    InvalidDestination(String),

    #[error("Failed to delete namespace {namespace}: {source}")]
    NamespaceError {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to remove finalizer {finalizer}: {source}")]
    FinalizerError {
        finalizer: String,
        #[source]
        source: kube::Error,
    },

    #[error("Reconciliation timed out after {0:?}")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, CleanupError>;
