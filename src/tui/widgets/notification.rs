//! Toast notification widget
//!
//! Displays a transient status message. The app holds at most one toast in
//! a single slot: showing a new one replaces the slot, which also retires
//! the previous dismissal deadline, so only one auto-dismiss is ever live.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Default display time before auto-dismiss
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Type of toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation succeeded
    Success,
    /// Operation was rejected or failed
    Error,
    /// Neutral status
    Info,
}

impl ToastKind {
    /// Get the color for this toast kind
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Error => Color::Red,
            Self::Info => Color::Blue,
        }
    }

    /// Get the title for this toast kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }
}

/// A transient status message
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message text
    pub message: String,
    /// Kind of toast
    pub kind: ToastKind,
    /// When the toast was shown (for auto-dismiss)
    pub created_at: Instant,
    /// How long to display
    pub duration: Duration,
}

impl Toast {
    /// Create a new toast
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: TOAST_DURATION,
        }
    }

    /// Create a success toast
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    /// Create an error toast
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    /// Create an info toast
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    /// Check if the toast has outlived its display time
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a toast
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    /// Create a new toast widget
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }
}

impl<'a> Widget for ToastWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.toast.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.toast.kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let paragraph = Paragraph::new(self.toast.message.as_str())
            .style(Style::default().fg(Color::White))
            .block(block);

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_creation() {
        let t = Toast::success("Receipt saved.");
        assert_eq!(t.message, "Receipt saved.");
        assert_eq!(t.kind, ToastKind::Success);
        assert!(!t.is_expired());
    }

    #[test]
    fn test_toast_expiry() {
        let mut t = Toast::info("old");
        t.duration = Duration::from_secs(0);
        assert!(t.is_expired());
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(ToastKind::Success.color(), Color::Green);
        assert_eq!(ToastKind::Error.color(), Color::Red);
        assert_eq!(ToastKind::Info.color(), Color::Blue);
    }
}
