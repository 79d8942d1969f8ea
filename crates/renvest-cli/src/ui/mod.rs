//! TUI rendering: orchestrates the landing pane, the modal and the toasts.

pub mod contact_form;
pub mod toasts;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_landing(f, rows[1]);
  draw_status(f, rows[2], app);

  if app.form.open {
    contact_form::draw(f, rows[1], &app.form);
  }
  toasts::draw(f, rows[1], &app.toasts);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " Renvestment",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  let pad = area
    .width
    .saturating_sub(left.width() as u16)
    .saturating_sub(right.width() as u16);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::DarkGray)),
    area,
  );
}

// ─── Landing ──────────────────────────────────────────────────────────────────

fn draw_landing(f: &mut Frame, area: Rect) {
  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let text = vec![
    Line::from(Span::styled(
      "Increase On-Time Rent Payments",
      Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    )),
    Line::raw(""),
    Line::from(Span::styled(
      "Simplified Landlord Rent Management",
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::raw(""),
    Line::from(Span::styled(
      "[c] Contact Us",
      Style::default().fg(Color::White).bg(Color::Blue),
    )),
  ];

  let top = inner.height.saturating_sub(text.len() as u16) / 2;
  let body = Rect {
    y: inner.y + top,
    height: inner.height.saturating_sub(top),
    ..inner
  };
  f.render_widget(
    Paragraph::new(text)
      .alignment(Alignment::Center)
      .wrap(Wrap { trim: true }),
    body,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.form.open {
    (
      "FORM",
      "Tab/↑↓ move  ←→ role  Enter next/send  Esc close",
    )
  } else {
    ("HOME", "c contact us  x dismiss  q quit")
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {hints}"), Style::default().fg(Color::DarkGray));

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, hint_span]))
      .style(Style::default().bg(Color::Black)),
    area,
  );
}

/// A `width` × `height` rectangle centred in `area`, clamped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}
