//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error classification and display text
//! - formatting: Relative times, scores and width-aware truncation
//! - layout: List/detail split
//! - navigation: Selection movement within a list
//! - retry: Reconnect backoff and refresh timing
//! - search: Search text matching and person filtering
//! - sorting: Person ordering per sort mode
//! - stats: Aggregate counts and guarded averages
//! - ui: Tab, sort and filter cycling

pub mod errors;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod retry;
pub mod search;
pub mod sorting;
pub mod stats;
pub mod ui;
