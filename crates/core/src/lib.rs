//! Core logic for the Canteiro dashboard.
//!
//! This crate has ZERO web dependencies. It holds the display records, the
//! presentation policy that turns them into widgets, and the shell state
//! machine that decides which page is on screen.
//!
//! # Modules
//!
//! - `dashboard` - KPI cards, alerts, projects table and the overview screen
//! - `navigation` - Auth mode, active view and overlay flags, with a pure reducer

pub mod dashboard;
pub mod navigation;
