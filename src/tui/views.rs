//! TUI rendering
//!
//! Draws the stats strip, the receipt form, the ledger panel, and the
//! overlays (toast, delete confirmation).

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_inr;

use super::app::{App, FormSlot, Pane, SearchField};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::ToastWidget;

/// Render the whole UI
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_stats(frame, app, layout.stats);
    render_form(frame, app, layout.form);
    render_ledger(frame, app, layout.ledger);
    render_status_bar(frame, app, layout.status_bar);

    if let Some(receipt) = &app.pending_delete {
        dialogs::confirm::render(
            frame,
            &format!("Delete receipt #{}?", receipt.receipt_no),
        );
    }

    if let Some(toast) = &app.toast {
        frame.render_widget(ToastWidget::new(toast), toast_area(frame.area()));
    }
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();
    let line = Line::from(vec![
        Span::raw(" Total Collection: "),
        Span::styled(
            format_inr(stats.total_collection),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    Receipts Issued: "),
        Span::styled(
            stats.total_receipts.to_string(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.settings.society_name));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let focused_pane = app.pane == Pane::Form;
    let draft = app.editor.draft();
    let slots = app.form_slots();

    let mut lines = Vec::with_capacity(slots.len() + 2);
    for (idx, slot) in slots.iter().enumerate() {
        let (label, value) = match slot {
            FormSlot::Field(field) => (
                field_label(*field).to_string(),
                app.editor.field_value(*field).to_string(),
            ),
            FormSlot::Row(i) => (
                format!("{}. {}", i + 1, draft.rows[*i].label),
                app.row_inputs[*i].clone(),
            ),
        };

        let style = if focused_pane && idx == app.form_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {:<22}", label), Style::default().fg(Color::Cyan)),
            Span::styled(value, style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Total".to_string(), Style::default().fg(Color::Cyan)),
        Span::raw("                 "),
        Span::styled(
            format_inr(draft.total),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let border_style = if focused_pane {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Receipt Draft ");

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_ledger(frame: &mut Frame, app: &App, area: Rect) {
    let focused_pane = app.pane == Pane::Ledger;
    let filtered = app.filtered();

    let mut lines = Vec::with_capacity(filtered.len() + 2);
    lines.push(search_line(app));
    lines.push(Line::from(Span::styled(
        format!(
            " {:<6} {:<14} {:<8} {:<18} {:>12}",
            "No", "Date", "House", "Name", "Total"
        ),
        Style::default().add_modifier(Modifier::UNDERLINED),
    )));

    for (idx, receipt) in filtered.iter().enumerate() {
        let style = if focused_pane && idx == app.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(Span::styled(
            format!(
                " {:<6} {:<14} {:<8} {:<18} {:>12}",
                truncate(&receipt.receipt_no, 6),
                truncate(&receipt.date, 14),
                truncate(&receipt.house_no, 8),
                truncate(&receipt.name, 18),
                format_inr(receipt.total),
            ),
            style,
        )));
    }

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            " No receipts found.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let border_style = if focused_pane {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Ledger ({}) ", filtered.len()));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn search_line(app: &App) -> Line<'static> {
    let term_style = |field: SearchField| {
        if app.search_field == Some(field) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    Line::from(vec![
        Span::styled(" Search  ", Style::default().fg(Color::Cyan)),
        Span::raw("Name:"),
        Span::styled(format!("[{}]", app.query.name), term_style(SearchField::Name)),
        Span::raw(" House:"),
        Span::styled(
            format!("[{}]", app.query.house),
            term_style(SearchField::House),
        ),
        Span::raw(" No:"),
        Span::styled(
            format!("[{}]", app.query.receipt_no),
            term_style(SearchField::ReceiptNo),
        ),
    ])
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.pane {
        Pane::Form => " Tab/Up/Down move | type to edit | Ctrl-S save | Ctrl-N new | Esc ledger",
        Pane::Ledger => {
            " Up/Down select | Enter edit | d delete | n new | / search | x export | q quit"
        }
    };

    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn toast_area(area: Rect) -> Rect {
    let width = 42.min(area.width);
    let height = 3.min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

fn field_label(field: crate::services::ReceiptField) -> &'static str {
    use crate::services::ReceiptField::*;
    match field {
        ReceiptNo => "Receipt No",
        Date => "Date",
        HouseNo => "House/Block No",
        Name => "Name",
        Payer => "By the hands of",
        CheckDetails => "Cheque details",
        Words => "Amount in words",
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 8), "short");
        assert_eq!(truncate("a very long name", 8), "a very …");
    }

    #[test]
    fn test_toast_area_pinned_to_top_right() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = toast_area(area);
        assert_eq!(rect.y, 0);
        assert_eq!(rect.x + rect.width, 100);
    }
}
