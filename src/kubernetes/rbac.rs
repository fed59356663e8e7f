// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ClusterRole describing the permissions the operator needs

use k8s_openapi::api::rbac::v1::{ClusterRole, PolicyRule};
use kube::api::{ApiResource, ObjectMeta};

fn rule(group: &str, resources: &[&str], verbs: &[&str]) -> PolicyRule {
    PolicyRule {
        api_groups: Some(vec![group.to_string()]),
        resources: Some(resources.iter().map(|r| r.to_string()).collect()),
        verbs: verbs.iter().map(|v| v.to_string()).collect(),
        ..Default::default()
    }
}

/// Build the ClusterRole for watching `application` resources and deleting namespaces.
///
/// Removing a finalizer is a full update of the Application, so `update` is granted
/// on the resource itself as well as on its `finalizers` subresource.
pub fn cluster_role(name: &str, application: &ApiResource) -> ClusterRole {
    let finalizers = format!("{}/finalizers", application.plural);

    ClusterRole {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        rules: Some(vec![
            rule(
                &application.group,
                &[application.plural.as_str()],
                &["get", "list", "watch", "update"],
            ),
            rule(&application.group, &[finalizers.as_str()], &["update"]),
            rule("", &["namespaces"], &["get", "list", "delete"]),
        ]),
        ..Default::default()
    }
}
