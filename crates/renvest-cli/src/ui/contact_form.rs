//! The contact modal.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::form::{ContactForm, FormField};

const WIDTH: u16 = 56;
const HEIGHT: u16 = 18;

/// Render the modal centred over `area`.
pub fn draw(f: &mut Frame, area: Rect, form: &ContactForm) {
  let modal = super::centered(area, WIDTH, HEIGHT);
  f.render_widget(Clear, modal);

  let block = Block::default()
    .title(" Renvestment ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Blue));
  let inner = block.inner(modal);
  f.render_widget(block, modal);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(2), // blurb
      Constraint::Length(3), // name
      Constraint::Length(3), // email
      Constraint::Length(1), // inline email error
      Constraint::Length(3), // role
      Constraint::Length(1), // submit
      Constraint::Min(0),
    ])
    .split(inner);

  f.render_widget(
    Paragraph::new(Span::styled(
      "We will send you product launch updates.",
      Style::default().fg(Color::Gray),
    )),
    rows[0],
  );

  draw_input(f, rows[1], "Your Name", &form.name, "Name...", form.focus == FormField::Name);
  draw_input(
    f,
    rows[2],
    "Your email",
    &form.email,
    "xyz@email.com",
    form.focus == FormField::Email,
  );

  if let Some(err) = form.email_error {
    f.render_widget(
      Paragraph::new(Span::styled(err, Style::default().fg(Color::Red))),
      rows[3],
    );
  }

  let role = form.role.map_or("Select one...", |r| r.label());
  draw_input(f, rows[4], "I am a", &format!("◂ {role} ▸"), "", form.focus == FormField::Role);

  draw_submit(f, rows[5], form);

  if let Some((rect, text)) = match form.focus {
    FormField::Name => Some((rows[1], &form.name)),
    FormField::Email => Some((rows[2], &form.email)),
    FormField::Role | FormField::Submit => None,
  } {
    let x = rect.x + 1 + (text.chars().count() as u16).min(rect.width.saturating_sub(3));
    f.set_cursor_position((x, rect.y + 1));
  }
}

fn draw_input(
  f: &mut Frame,
  area: Rect,
  label: &str,
  value: &str,
  placeholder: &str,
  focused: bool,
) {
  let border = if focused {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  let block = Block::default()
    .title(format!(" {label} "))
    .borders(Borders::ALL)
    .border_style(border);

  let content = if value.is_empty() {
    Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
  } else {
    Span::raw(value.to_string())
  };
  f.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

fn draw_submit(f: &mut Frame, area: Rect, form: &ContactForm) {
  let mut style = if form.is_complete() {
    Style::default().fg(Color::White).bg(Color::Blue)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  if form.focus == FormField::Submit {
    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
  }
  f.render_widget(
    Paragraph::new(Span::styled(" Send message ", style))
      .alignment(ratatui::layout::Alignment::Center),
    area,
  );
}
