// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use futures::future::try_join_all;
use kube::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app_cleanup_operator::cli::{Cli, Commands};
use app_cleanup_operator::config::Config;
use app_cleanup_operator::constants::OPERATOR_NAME;
use app_cleanup_operator::kubernetes::{cluster_role, wait_for_application_crd};
use app_cleanup_operator::reconcilers::ApplicationCleanupReconciler;
use app_cleanup_operator::types::application::api_resource;

#[tokio::main]
async fn main() -> Result<()> {
    match Cli::parse().command() {
        // Printed before tracing starts, keeping stdout clean for kubectl
        Commands::Rbac => print_rbac(),
        Commands::Run => run().await,
    }
}

fn print_rbac() -> Result<()> {
    let role = cluster_role(OPERATOR_NAME, &api_resource());
    print!("{}", serde_yaml::to_string(&role).context("Failed to render ClusterRole")?);
    Ok(())
}

async fn run() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting {}", OPERATOR_NAME);

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: registrations={:?}, watch_namespace={:?}",
        config.registrations, config.watch_namespace
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    // Wait for the ArgoCD Application CRD before starting reconcilers
    info!("Waiting for ArgoCD Application CRD to become available...");
    wait_for_application_crd(&client, &api_resource()).await?;

    let reconcilers = config.registrations.iter().map(|registration| {
        ApplicationCleanupReconciler::new(client.clone(), config.clone(), registration.clone())
            .run()
    });

    info!("Starting reconcilers...");
    try_join_all(reconcilers).await?;

    info!("All reconcilers stopped");
    Ok(())
}
