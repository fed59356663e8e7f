// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Coordinates of the ArgoCD Application resource
pub mod application {
    pub const GROUP: &str = "argoproj.io";
    pub const VERSION: &str = "v1alpha1";
    pub const KIND: &str = "Application";
    pub const PLURAL: &str = "applications";
}

/// Finalizers and controller names used when no registrations are configured
pub mod defaults {
    pub const FINALIZER: &str = "namespace.app-cleanup.io";
    pub const CONTROLLER_NAME: &str = "application-cleanup-controller";
    pub const ARGO_FINALIZER: &str = "namespaces.argo.app-cleanup.io";
    pub const ARGO_CONTROLLER_NAME: &str = "argo-ns-cleanup";

    pub const ERROR_REQUEUE_SECS: u64 = 60;
    pub const RECONCILE_TIMEOUT_SECS: u64 = 30;
}

/// The operator name, used for the generated ClusterRole
pub const OPERATOR_NAME: &str = "app-cleanup-operator";

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}
