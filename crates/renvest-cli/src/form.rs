//! The contact form state machine.
//!
//! Holds what the user has typed, which control has focus, and the inline
//! error attached to the email field. It never talks to the network: the
//! app turns a [`Submission`] into a [`SubmitOutcome`] and hands the outcome
//! back through [`ContactForm::apply`].

use renvest_core::{contact::Role, email::normalize};
use strum::IntoEnumIterator as _;

use crate::{
  client::{SubmitOutcome, Submission},
  toast::ToastKind,
};

pub const DUPLICATE_EMAIL_MSG: &str = "This email is already registered.";
pub const SUCCESS_MSG: &str = "Thanks! We'll send you product launch updates.";
pub const FAILURE_MSG: &str = "Something went wrong. Please try again.";

/// The controls of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
  Name,
  Email,
  Role,
  Submit,
}

impl FormField {
  const ORDER: [FormField; 4] =
    [FormField::Name, FormField::Email, FormField::Role, FormField::Submit];

  fn position(self) -> usize {
    Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
  }

  fn next(self) -> Self {
    Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
  }

  fn prev(self) -> Self {
    Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
  }
}

/// A notification the app should show after applying an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub message: &'static str,
  pub kind:    ToastKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
  /// Whether the modal is showing.
  pub open:        bool,
  pub name:        String,
  pub email:       String,
  /// `None` is the "Select one..." placeholder.
  pub role:        Option<Role>,
  pub focus:       FormField,
  /// Inline error shown under the email input.
  pub email_error: Option<&'static str>,
}

impl Default for ContactForm {
  fn default() -> Self {
    Self {
      open:        false,
      name:        String::new(),
      email:       String::new(),
      role:        None,
      focus:       FormField::Name,
      email_error: None,
    }
  }
}

impl ContactForm {
  pub fn new() -> Self { Self::default() }

  pub fn open(&mut self) { self.open = true; }

  /// Hide the modal. Typed values are kept for the next time it opens.
  pub fn close(&mut self) { self.open = false; }

  /// Submit is enabled only when no field is empty.
  pub fn is_complete(&self) -> bool {
    !self.name.is_empty() && !self.email.is_empty() && self.role.is_some()
  }

  pub fn focus_next(&mut self) { self.focus = self.focus.next(); }

  pub fn focus_prev(&mut self) { self.focus = self.focus.prev(); }

  /// Type `c` into the focused text input.
  pub fn input_char(&mut self, c: char) {
    match self.focus {
      FormField::Name => self.name.push(c),
      FormField::Email => {
        self.email.push(c);
        self.email_error = None;
      }
      FormField::Role | FormField::Submit => {}
    }
  }

  /// Delete the last character of the focused text input.
  pub fn backspace(&mut self) {
    match self.focus {
      FormField::Name => {
        self.name.pop();
      }
      FormField::Email => {
        self.email.pop();
        self.email_error = None;
      }
      FormField::Role | FormField::Submit => {}
    }
  }

  /// Step through placeholder → Tenant → Landlord → Property Management.
  pub fn cycle_role(&mut self, forward: bool) {
    let options: Vec<Option<Role>> =
      std::iter::once(None).chain(Role::iter().map(Some)).collect();
    let current = options.iter().position(|r| *r == self.role).unwrap_or(0);
    let len = options.len();
    let next = if forward {
      (current + 1) % len
    } else {
      (current + len - 1) % len
    };
    self.role = options[next];
  }

  /// The request to send, or `None` while submit is disabled.
  pub fn submission(&self) -> Option<Submission> {
    if !self.is_complete() {
      return None;
    }
    Some(Submission {
      name:  self.name.clone(),
      email: normalize(&self.email),
      role:  self.role?,
    })
  }

  /// Update the form for a finished submission and say what to announce.
  pub fn apply(&mut self, outcome: &SubmitOutcome) -> Option<Notice> {
    match outcome {
      SubmitOutcome::Created(_) => {
        *self = Self::default();
        Some(Notice {
          message: SUCCESS_MSG,
          kind:    ToastKind::Success,
        })
      }
      SubmitOutcome::DuplicateEmail => {
        self.email_error = Some(DUPLICATE_EMAIL_MSG);
        self.focus = FormField::Email;
        None
      }
      SubmitOutcome::Rejected { .. } | SubmitOutcome::Network(_) => Some(Notice {
        message: FAILURE_MSG,
        kind:    ToastKind::Error,
      }),
    }
  }
}
