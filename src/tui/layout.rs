//! Layout definitions for the TUI
//!
//! Stats strip on top, receipt form and ledger panel side by side, one-line
//! status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Stats strip (collection total, receipt count)
    pub stats: Rect,
    /// Receipt form (the current draft)
    pub form: Rect,
    /// Ledger panel (search + saved receipts)
    pub ledger: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Stats strip
                Constraint::Min(10),   // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55), // Form
                Constraint::Percentage(45), // Ledger
            ])
            .split(vertical[1]);

        Self {
            stats: vertical[0],
            form: horizontal[0],
            ledger: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// A fixed-size rect centered in the given area
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
