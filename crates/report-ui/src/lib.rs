//! Terminal UI layer for the IBKR report analyzer.
//!
//! Provides themes, the read-only summary view and the application event
//! loop built on top of [`ratatui`] for rendering the report figures in
//! the terminal.

pub mod app;
pub mod summary_view;
pub mod themes;

pub use report_core as core;
