//! Toast column: bottom-right corner, newest at the bottom.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Style},
  text::Span,
  widgets::{Clear, Paragraph},
};

use crate::toast::{ToastKind, Toasts};

const MAX_WIDTH: u16 = 48;

pub fn draw(f: &mut Frame, area: Rect, toasts: &Toasts) {
  if toasts.is_empty() {
    return;
  }
  let mut bottom = area.y + area.height;

  for toast in toasts.iter().rev() {
    if bottom <= area.y {
      break;
    }
    let (icon, style) = match toast.kind {
      ToastKind::Success => ("✓", Style::default().fg(Color::White).bg(Color::Blue)),
      ToastKind::Error => ("!", Style::default().fg(Color::White).bg(Color::Red)),
      ToastKind::Info => ("i", Style::default().fg(Color::White).bg(Color::DarkGray)),
    };
    let text = format!(" {icon} {} ", toast.message);
    let width = (text.chars().count() as u16).min(MAX_WIDTH).min(area.width);

    bottom -= 1;
    let rect = Rect {
      x: area.x + area.width - width,
      y: bottom,
      width,
      height: 1,
    };
    f.render_widget(Clear, rect);
    f.render_widget(Paragraph::new(Span::styled(text, style)), rect);
  }
}
