// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ArgoCD Application access.
//!
//! The Application CRD belongs to ArgoCD, so the object is kept as a
//! [`DynamicObject`] and every field we do not read survives the update
//! untouched. The parts we rely on are validated through [`ApplicationSpec`].

use crate::constants::application::{GROUP, KIND, PLURAL, VERSION};
use crate::error::{CleanupError, Result};
use kube::{
    api::{ApiResource, DynamicObject, GroupVersionKind},
    ResourceExt,
};
use serde::Deserialize;

/// API resource for `argoproj.io/v1alpha1, Kind=Application`
pub fn api_resource() -> ApiResource {
    let gvk = GroupVersionKind::gvk(GROUP, VERSION, KIND);
    ApiResource::from_gvk_with_plural(&gvk, PLURAL)
}

/// The slice of `spec` the cleanup reads. Other fields are ignored, whatever their shape.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ApplicationSpec {
    #[serde(default)]
    pub destination: Option<ApplicationDestination>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ApplicationDestination {
    #[serde(default)]
    pub namespace: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Application {
    object: DynamicObject,
}

impl From<DynamicObject> for Application {
    fn from(object: DynamicObject) -> Self {
        Self { object }
    }
}

impl Application {
    /// `namespace/name` of the Application
    pub fn key(&self) -> String {
        format!(
            "{}/{}",
            self.object.namespace().unwrap_or_default(),
            self.object.name_any()
        )
    }

    /// Check if deletion was requested (the store set a deletion timestamp)
    pub fn is_deleting(&self) -> bool {
        self.object.metadata.deletion_timestamp.is_some()
    }

    pub fn finalizers(&self) -> &[String] {
        self.object.finalizers()
    }

    pub fn has_finalizer(&self, finalizer: &str) -> bool {
        has_finalizer(self.finalizers(), finalizer)
    }

    /// Typed view of `spec`
    pub fn spec(&self) -> Result<ApplicationSpec> {
        let Some(spec) = self.object.data.get("spec") else {
            return Err(CleanupError::InvalidDestination(format!(
                "Application {} has no spec",
                self.key()
            )));
        };

        ApplicationSpec::deserialize(spec).map_err(|e| {
            CleanupError::InvalidDestination(format!(
                "Application {} has a malformed spec: {}",
                self.key(),
                e
            ))
        })
    }

    /// The namespace that gets deleted together with this Application
    pub fn destination_namespace(&self) -> Result<String> {
        self.spec()?
            .destination
            .and_then(|d| d.namespace)
            .filter(|ns| !ns.is_empty())
            .ok_or_else(|| {
                CleanupError::InvalidDestination(format!(
                    "Application {} has no destination namespace",
                    self.key()
                ))
            })
    }

    /// Copy of the underlying object with `finalizer` removed from its finalizers
    pub fn without_finalizer(&self, finalizer: &str) -> DynamicObject {
        let mut object = self.object.clone();
        object.metadata.finalizers = Some(remove_finalizer(self.finalizers(), finalizer));
        object
    }
}

pub fn has_finalizer(finalizers: &[String], finalizer: &str) -> bool {
    finalizers.iter().any(|f| f == finalizer)
}

/// Every entry except `finalizer`, in their original order
pub fn remove_finalizer(finalizers: &[String], finalizer: &str) -> Vec<String> {
    finalizers
        .iter()
        .filter(|f| *f != finalizer)
        .cloned()
        .collect()
}
