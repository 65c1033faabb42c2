//! Global Application State
//!
//! Reactive state shared by every page: toasts and the login flag.

use leptos::*;
use studybuddy::auth::TokenStore;

use crate::api::LocalTokenStore;

/// How long a success toast stays up, in milliseconds
const SUCCESS_TOAST_MS: u32 = 3000;
/// How long an error toast stays up, in milliseconds
const ERROR_TOAST_MS: u32 = 5000;

/// Numbers each toast so a timeout only clears the message it was set for
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ToastSeq(u64);

impl ToastSeq {
    fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Whether a token is stored
    pub logged_in: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    error_seq: StoredValue<ToastSeq>,
    success_seq: StoredValue<ToastSeq>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        logged_in: create_rw_signal(LocalTokenStore.is_logged_in()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        error_seq: store_value(ToastSeq::default()),
        success_seq: store_value(ToastSeq::default()),
    };

    provide_context(state);
}

/// Set `slot` and clear it after `ms` unless a newer message replaced it
fn flash(slot: RwSignal<Option<String>>, seq: StoredValue<ToastSeq>, message: &str, ms: u32) {
    let mut ticket = 0;
    seq.update_value(|s| ticket = s.issue());
    slot.set(Some(message.to_string()));

    gloo_timers::callback::Timeout::new(ms, move || {
        if seq.with_value(|s| s.is_latest(ticket)) {
            slot.set(None);
        }
    })
    .forget();
}

/// The state provided by [`provide_global_state`]
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        flash(self.success, self.success_seq, message, SUCCESS_TOAST_MS);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        flash(self.error, self.error_seq, message, ERROR_TOAST_MS);
    }

    /// Store a fresh token and flip the login flag
    pub fn log_in(&self, token: &str) {
        match LocalTokenStore.save(token) {
            Ok(()) => self.logged_in.set(true),
            Err(e) => self.show_error(&e.to_string()),
        }
    }

    /// Forget the token
    pub fn log_out(&self) {
        if let Err(e) = LocalTokenStore.clear() {
            web_sys::console::error_1(&format!("Failed to clear token: {}", e).into());
        }
        self.logged_in.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_toast_ticket() {
        let mut seq = ToastSeq::default();
        let first = seq.issue();
        assert!(seq.is_latest(first));

        let second = seq.issue();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }
}
