//! Read-only summary view for the report analyzer TUI.
//!
//! Renders the four summary figures as a bordered two-column table with
//! the unrealized-profit row coloured by sign, plus a footer carrying the
//! empty-folder warning and the exit hint.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use report_core::formatting;
use report_core::models::ReportSummary;

use crate::themes::Theme;

/// Render the summary table and footer into `area`.
pub fn render_summary_view(
    frame: &mut Frame,
    area: Rect,
    summary: &ReportSummary,
    folder_empty: bool,
    theme: &Theme,
) {
    let chunks = Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).split(area);

    render_figures(frame, chunks[0], summary, theme);
    render_footer(frame, chunks[1], folder_empty, theme);
}

/// The bordered two-column table with one row per figure.
fn render_figures(frame: &mut Frame, area: Rect, summary: &ReportSummary, theme: &Theme) {
    let profit = summary.unrealized_profit();

    let figure_row = |i: usize, label: &str, amount: f64, value_style| {
        let row_style = if i % 2 == 0 {
            theme.table_row
        } else {
            theme.table_row_alt
        };
        Row::new(vec![
            Cell::from(label.to_string()).style(theme.label),
            Cell::from(
                Line::from(formatting::format_amount(amount)).alignment(Alignment::Right),
            )
            .style(value_style),
        ])
        .style(row_style)
    };

    let rows = vec![
        figure_row(0, "Sum of all deposits:", summary.total_deposits, theme.value),
        figure_row(
            1,
            "Sum of all withdrawals:",
            summary.total_withdrawals,
            theme.value,
        ),
        figure_row(2, "Last NAV:", summary.last_nav, theme.value),
        figure_row(3, "Unrealized Profit:", profit, theme.profit_style(profit)),
    ];

    let widths = [Constraint::Length(26), Constraint::Min(16)];

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" IBKR Report Summary ", theme.header)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Warning and exit-hint lines below the table.
fn render_footer(frame: &mut Frame, area: Rect, folder_empty: bool, theme: &Theme) {
    let mut lines = Vec::new();
    if folder_empty {
        lines.push(Line::from(Span::styled(
            "Warning: The data folder is empty.",
            theme.warning,
        )));
    }
    lines.push(Line::from(Span::styled(
        "Press 'q' or Ctrl+C to exit",
        theme.dim,
    )));

    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(lines)).alignment(Alignment::Center),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
