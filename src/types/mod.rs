// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Views over resources owned by other operators.

pub mod application;

pub use application::Application;
