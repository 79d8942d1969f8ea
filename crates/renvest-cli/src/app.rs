//! Application state and key dispatcher.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
  client::ApiClient,
  form::{ContactForm, FormField},
  toast::{DEFAULT_DURATION, ToastKind, Toasts},
};

const INCOMPLETE_MSG: &str = "Fill in every field to send.";

/// Top-level application state.
pub struct App {
  /// The contact modal and everything typed into it.
  pub form: ContactForm,

  /// Notifications shown in the bottom-right corner.
  pub toasts: Toasts,

  /// Shared HTTP client.
  pub client: ApiClient,
}

impl App {
  pub fn new(client: ApiClient) -> Self {
    Self {
      form: ContactForm::new(),
      toasts: Toasts::new(),
      client,
    }
  }

  /// Expire old toasts. Called once per frame.
  pub fn tick(&mut self) { self.toasts.prune(Instant::now()); }

  // ── Submission ────────────────────────────────────────────────────────────

  /// Send the form, if it is complete, and apply the result.
  ///
  /// One request per call. The event loop awaits it before reading the next
  /// key, so a second submit cannot start while one is in flight.
  async fn submit(&mut self) {
    let Some(submission) = self.form.submission() else {
      self.toasts.push(INCOMPLETE_MSG, ToastKind::Info, DEFAULT_DURATION);
      return;
    };
    let outcome = self.client.submit_contact(&submission).await;
    if let Some(notice) = self.form.apply(&outcome) {
      self.toasts.push(notice.message, notice.kind, DEFAULT_DURATION);
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if self.form.open {
      self.handle_form_key(key).await;
      true
    } else {
      self.handle_landing_key(key)
    }
  }

  fn handle_landing_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Char('c') | KeyCode::Enter => self.form.open(),
      // Dismiss the newest toast.
      KeyCode::Char('x') => {
        let newest = self.toasts.iter().next_back().map(|t| t.id);
        if let Some(id) = newest {
          self.toasts.dismiss(id);
        }
      }
      _ => {}
    }
    true
  }

  async fn handle_form_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => self.form.close(),
      KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
      KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),

      KeyCode::Left if self.form.focus == FormField::Role => self.form.cycle_role(false),
      KeyCode::Right | KeyCode::Char(' ') if self.form.focus == FormField::Role => {
        self.form.cycle_role(true);
      }

      KeyCode::Enter => match self.form.focus {
        FormField::Submit => self.submit().await,
        _ => self.form.focus_next(),
      },

      KeyCode::Backspace => self.form.backspace(),
      KeyCode::Char(c) => self.form.input_char(c),

      _ => {}
    }
  }
}
