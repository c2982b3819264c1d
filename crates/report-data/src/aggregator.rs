//! Reduction of extracted records into the three summary figures.

use std::path::Path;

use report_core::error::Result;
use report_core::models::{CashFlowRecord, NavRecord, ReportSummary};
use tracing::info;

use crate::{extractor, reader};

// ── ReportAggregator ──────────────────────────────────────────────────────────

/// Stateless helper that reduces extracted records into summary totals.
pub struct ReportAggregator;

impl ReportAggregator {
    /// Sum of all strictly positive cash-flow amounts.
    pub fn sum_deposits(records: &[CashFlowRecord]) -> f64 {
        records
            .iter()
            .filter(|r| r.is_deposit())
            .map(|r| r.amount)
            .sum()
    }

    /// Sum of the absolute values of all strictly negative cash-flow
    /// amounts. The result is non-negative.
    pub fn sum_withdrawals(records: &[CashFlowRecord]) -> f64 {
        records
            .iter()
            .filter(|r| r.is_withdrawal())
            .map(|r| r.amount.abs())
            .sum()
    }

    /// Build the summary from extracted records. A missing NAV maps to 0.
    pub fn summarize(records: &[CashFlowRecord], nav: Option<&NavRecord>) -> ReportSummary {
        ReportSummary {
            total_deposits: Self::sum_deposits(records),
            total_withdrawals: Self::sum_withdrawals(records),
            last_nav: nav.map(|n| n.amount).unwrap_or(0.0),
        }
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Run the full pipeline over `data_dir`: load the corpus, extract the
/// matching records and reduce them into a [`ReportSummary`].
///
/// Single synchronous pass; any ingestion or extraction failure aborts the
/// run with no partial summary.
pub fn summarize_folder(data_dir: &Path) -> Result<ReportSummary> {
    let corpus = reader::load_corpus(data_dir)?;
    let cash_flows = extractor::extract_cash_flows(&corpus)?;
    let nav = extractor::extract_last_nav(&corpus)?;

    let summary = ReportAggregator::summarize(&cash_flows, nav.as_ref());
    info!(
        "Summary: deposits {:.2}, withdrawals {:.2}, last NAV {:.2}",
        summary.total_deposits, summary.total_withdrawals, summary.last_nav
    );
    Ok(summary)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
