//! Prefix matching and amount extraction over a report corpus.
//!
//! IBKR activity statements interleave many report sections in one file;
//! only two row shapes matter here and both are recognised by an exact
//! literal prefix at the start of the line.

use report_core::error::{ReportError, Result};
use report_core::models::{CashFlowRecord, NavRecord, ReportCorpus};
use tracing::debug;

/// Literal prefix of deposit/withdrawal total rows.
pub const CASH_FLOW_PREFIX: &str = "Deposits & Withdrawals,Data,Total";

/// Literal prefix of ending net-asset-value rows.
pub const NAV_PREFIX: &str = "Change in NAV,Data,Ending Value,";

/// Minimum comma-separated field count of a qualifying row. The tag fields
/// alone account for three; the amount must be at least a fourth.
const MIN_FIELDS: usize = 4;

// ── Public API ────────────────────────────────────────────────────────────────

/// Collect every cash-flow record in corpus order.
///
/// A matching line whose amount field does not parse aborts the whole pass;
/// there is no per-line skip.
pub fn extract_cash_flows(corpus: &ReportCorpus) -> Result<Vec<CashFlowRecord>> {
    let mut records = Vec::new();
    for line in corpus.lines() {
        if line.starts_with(CASH_FLOW_PREFIX) {
            let amount = parse_amount(line)?;
            records.push(CashFlowRecord { amount });
        }
    }
    debug!("Extracted {} cash-flow records", records.len());
    Ok(records)
}

/// Find the last NAV record in corpus order.
///
/// Scans from the end of the corpus backwards and returns the first
/// qualifying row; earlier NAV rows are superseded and never parsed.
/// Returns `None` when no row qualifies.
pub fn extract_last_nav(corpus: &ReportCorpus) -> Result<Option<NavRecord>> {
    for line in corpus.lines().iter().rev() {
        if line.starts_with(NAV_PREFIX) {
            let amount = parse_amount(line)?;
            return Ok(Some(NavRecord { amount }));
        }
    }
    Ok(None)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse the amount of a matched row: the final comma-separated field,
/// trimmed of surrounding whitespace, as a decimal number.
///
/// Rows with fewer than [`MIN_FIELDS`] fields or a non-numeric final field
/// are an error.
fn parse_amount(line: &str) -> Result<f64> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return Err(ReportError::AmountParse {
            line: line.to_string(),
        });
    }

    fields[fields.len() - 1]
        .trim()
        .parse::<f64>()
        .map_err(|_| ReportError::AmountParse {
            line: line.to_string(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn corpus_of(lines: &[&str]) -> ReportCorpus {
        ReportCorpus::new(lines.iter().map(|l| l.to_string()).collect())
    }

    /// The legacy parse: slice the line at a fixed character offset and
    /// parse the remainder. Cash-flow rows used offset 36, NAV rows 32.
    fn legacy_offset_amount(line: &str, offset: usize) -> f64 {
        line[offset..].trim().parse().unwrap()
    }

    // ── extract_cash_flows ────────────────────────────────────────────────────

    #[test]
    fn test_cash_flows_matched_in_corpus_order() {
        let corpus = corpus_of(&[
            "Statement,Header,Field Name,Field Value",
            "Deposits & Withdrawals,Data,Total,,,500.00",
            "Trades,Data,Order,Stocks,USD,AAPL",
            "Deposits & Withdrawals,Data,Total,,,-120.00",
            "Deposits & Withdrawals,Data,Total,,,300.00",
        ]);

        let records = extract_cash_flows(&corpus).unwrap();
        let amounts: Vec<f64> = records.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![500.0, -120.0, 300.0]);
    }

    #[test]
    fn test_cash_flows_none_matching() {
        let corpus = corpus_of(&[
            "Statement,Header,Field Name,Field Value",
            "Trades,Data,Order,Stocks,USD,AAPL",
        ]);
        let records = extract_cash_flows(&corpus).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_cash_flows_zero_amount_is_recorded() {
        let corpus = corpus_of(&["Deposits & Withdrawals,Data,Total,,,0"]);
        let records = extract_cash_flows(&corpus).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 0.0);
        assert!(!records[0].is_deposit());
        assert!(!records[0].is_withdrawal());
    }

    #[test]
    fn test_cash_flows_non_numeric_amount_is_an_error() {
        let corpus = corpus_of(&[
            "Deposits & Withdrawals,Data,Total,,,500.00",
            "Deposits & Withdrawals,Data,Total,,,N/A",
        ]);
        let err = extract_cash_flows(&corpus).unwrap_err();
        assert!(matches!(err, ReportError::AmountParse { .. }));
    }

    #[test]
    fn test_cash_flows_bare_prefix_is_an_error() {
        let corpus = corpus_of(&["Deposits & Withdrawals,Data,Total"]);
        let err = extract_cash_flows(&corpus).unwrap_err();
        assert!(matches!(err, ReportError::AmountParse { .. }));
    }

    #[test]
    fn test_cash_flows_prefix_must_start_the_line() {
        let corpus = corpus_of(&["  Deposits & Withdrawals,Data,Total,,,500.00"]);
        let records = extract_cash_flows(&corpus).unwrap();
        assert!(records.is_empty());
    }

    // ── extract_last_nav ──────────────────────────────────────────────────────

    #[test]
    fn test_last_nav_picks_last_occurrence() {
        let corpus = corpus_of(&[
            "Change in NAV,Data,Ending Value,100.00",
            "Trades,Data,Order,Stocks,USD,AAPL",
            "Change in NAV,Data,Ending Value,250.50",
            "Change in NAV,Data,Ending Value,99.25",
        ]);

        let nav = extract_last_nav(&corpus).unwrap().unwrap();
        assert_eq!(nav.amount, 99.25);
    }

    #[test]
    fn test_last_nav_none_when_absent() {
        let corpus = corpus_of(&["Statement,Header,Field Name,Field Value"]);
        assert!(extract_last_nav(&corpus).unwrap().is_none());
    }

    #[test]
    fn test_last_nav_earlier_rows_never_parsed() {
        // Backward scan stops at the last row, so a malformed earlier row
        // goes unnoticed.
        let corpus = corpus_of(&[
            "Change in NAV,Data,Ending Value,N/A",
            "Change in NAV,Data,Ending Value,99.25",
        ]);
        let nav = extract_last_nav(&corpus).unwrap().unwrap();
        assert_eq!(nav.amount, 99.25);
    }

    #[test]
    fn test_last_nav_non_numeric_amount_is_an_error() {
        let corpus = corpus_of(&["Change in NAV,Data,Ending Value,N/A"]);
        let err = extract_last_nav(&corpus).unwrap_err();
        assert!(matches!(err, ReportError::AmountParse { .. }));
    }

    #[test]
    fn test_last_nav_empty_amount_is_an_error() {
        let corpus = corpus_of(&["Change in NAV,Data,Ending Value,"]);
        let err = extract_last_nav(&corpus).unwrap_err();
        assert!(matches!(err, ReportError::AmountParse { .. }));
    }

    // ── Delimiter parse vs legacy fixed-offset parse ──────────────────────────

    #[test]
    fn test_cash_flow_amount_matches_legacy_offset() {
        let lines = [
            "Deposits & Withdrawals,Data,Total,,,5000.25",
            "Deposits & Withdrawals,Data,Total,,,-1200",
            "Deposits & Withdrawals,Data,Total,,,0.01",
        ];
        for line in lines {
            let records = extract_cash_flows(&corpus_of(&[line])).unwrap();
            assert_eq!(records[0].amount, legacy_offset_amount(line, 36), "{line}");
        }
    }

    #[test]
    fn test_nav_amount_matches_legacy_offset() {
        let lines = [
            "Change in NAV,Data,Ending Value,99.25",
            "Change in NAV,Data,Ending Value,-42.0",
            "Change in NAV,Data,Ending Value,1000000.99",
        ];
        for line in lines {
            let nav = extract_last_nav(&corpus_of(&[line])).unwrap().unwrap();
            assert_eq!(nav.amount, legacy_offset_amount(line, 32), "{line}");
        }
    }
}
