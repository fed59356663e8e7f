// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for CRD discovery, namespace deletion and RBAC.

pub mod crd;
pub mod namespaces;
pub mod rbac;

pub use crd::wait_for_application_crd;
pub use namespaces::delete_namespace;
pub use rbac::cluster_role;
