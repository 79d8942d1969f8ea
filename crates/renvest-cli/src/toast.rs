//! Transient, auto-dismissing notifications.

use std::time::{Duration, Instant};

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
  Success,
  Error,
  Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
  pub id:         u64,
  pub message:    String,
  pub kind:       ToastKind,
  pub expires_at: Instant,
}

/// Toasts in insertion order. Each one expires on its own schedule.
#[derive(Debug, Default)]
pub struct Toasts {
  next_id: u64,
  items:   Vec<Toast>,
}

impl Toasts {
  pub fn new() -> Self { Self::default() }

  /// Show `message` for `duration`, starting now. Returns the toast id.
  pub fn push(
    &mut self,
    message: impl Into<String>,
    kind: ToastKind,
    duration: Duration,
  ) -> u64 {
    self.push_at(Instant::now(), message, kind, duration)
  }

  pub fn push_at(
    &mut self,
    now: Instant,
    message: impl Into<String>,
    kind: ToastKind,
    duration: Duration,
  ) -> u64 {
    let id = self.next_id;
    self.next_id += 1;
    self.items.push(Toast {
      id,
      message: message.into(),
      kind,
      expires_at: now + duration,
    });
    id
  }

  /// Drop every toast whose time is up at `now`.
  pub fn prune(&mut self, now: Instant) {
    self.items.retain(|t| t.expires_at > now);
  }

  pub fn dismiss(&mut self, id: u64) { self.items.retain(|t| t.id != id); }

  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> { self.items.iter() }

  pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn toasts_stack_in_order_with_unique_ids() {
    let mut t = Toasts::new();
    let now = Instant::now();
    let a = t.push_at(now, "first", ToastKind::Success, DEFAULT_DURATION);
    let b = t.push_at(now, "second", ToastKind::Error, DEFAULT_DURATION);
    assert_ne!(a, b);
    let messages: Vec<_> = t.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["first", "second"]);
  }

  #[test]
  fn each_toast_expires_on_its_own() {
    let mut t = Toasts::new();
    let now = Instant::now();
    t.push_at(now, "short", ToastKind::Info, Duration::from_millis(100));
    t.push_at(now, "long", ToastKind::Info, DEFAULT_DURATION);

    t.prune(now + Duration::from_millis(50));
    assert_eq!(t.iter().count(), 2);

    t.prune(now + Duration::from_millis(100));
    assert_eq!(t.iter().count(), 1);
    assert_eq!(t.iter().next().unwrap().message, "long");

    t.prune(now + DEFAULT_DURATION);
    assert!(t.is_empty());
  }

  #[test]
  fn dismiss_removes_only_that_toast() {
    let mut t = Toasts::new();
    let a = t.push("a", ToastKind::Success, DEFAULT_DURATION);
    t.push("b", ToastKind::Success, DEFAULT_DURATION);
    t.dismiss(a);
    assert_eq!(t.iter().count(), 1);
    assert_eq!(t.iter().next().unwrap().message, "b");
  }
}
