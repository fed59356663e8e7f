// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line interface of the operator binary.

use clap::{Parser, Subcommand};

/// Deletes the destination namespace of ArgoCD Applications carrying a cleanup finalizer
#[derive(Parser, Debug)]
#[clap(name = "app-cleanup-operator", version)]
pub struct Cli {
    #[clap(subcommand)]
    subcommand: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the cleanup controllers (default)
    Run,
    /// Print the ClusterRole the operator needs and exit
    Rbac,
}

impl Cli {
    /// The requested subcommand, `run` when none was given
    pub fn command(&self) -> Commands {
        self.subcommand.clone().unwrap_or(Commands::Run)
    }
}
