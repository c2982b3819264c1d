//! Domain types shared across the analyzer crates.

// ── ReportCorpus ──────────────────────────────────────────────────────────────

/// One run's worth of report text.
///
/// Holds every line from every ingested file, files in the order the
/// filesystem enumerated them, lines in file-internal order. Rebuilt fresh
/// on each invocation and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ReportCorpus {
    lines: Vec<String>,
}

impl ReportCorpus {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// All lines in corpus order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

/// A parsed deposit or withdrawal amount. Sign encodes direction: positive
/// is a deposit, negative is a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlowRecord {
    pub amount: f64,
}

impl CashFlowRecord {
    /// Strictly positive amounts are deposits.
    pub fn is_deposit(&self) -> bool {
        self.amount > 0.0
    }

    /// Strictly negative amounts are withdrawals. An exactly-zero amount is
    /// neither a deposit nor a withdrawal.
    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0.0
    }
}

/// A parsed ending net-asset-value amount. Only the last occurrence in
/// corpus order is significant; earlier ones are superseded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavRecord {
    pub amount: f64,
}

// ── ReportSummary ─────────────────────────────────────────────────────────────

/// The three summary figures computed from one corpus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportSummary {
    /// Sum of all strictly positive cash-flow amounts.
    pub total_deposits: f64,
    /// Sum of the absolute values of all strictly negative cash-flow amounts.
    pub total_withdrawals: f64,
    /// Amount of the last NAV row in the corpus, 0 when none exists.
    pub last_nav: f64,
}

impl ReportSummary {
    /// Last NAV minus total deposits.
    pub fn unrealized_profit(&self) -> f64 {
        self.last_nav - self.total_deposits
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
