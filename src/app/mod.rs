//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule orchestrates between:
//! - Model state (pure, in friendstui::model)
//! - The background API worker (friendstui::services)
//! - Logic (pure business logic in friendstui::logic)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod filters;
pub(crate) mod navigation;
pub(crate) mod requests;
pub(crate) mod sorting;
