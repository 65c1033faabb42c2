//! Toast Notification Component
//!
//! Success and error messages in the top-right corner. Pages raise them
//! through [`GlobalState`](crate::state::GlobalState) instead of blocking
//! alerts; each one clears itself or can be dismissed.

use leptos::*;

use crate::state::use_global_state;

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed top-20 right-4 z-50 w-80 space-y-2">
            {move || state.error.get().map(|msg| view! {
                <Notice message=msg kind=NoticeKind::Error source=state.error />
            })}
            {move || state.success.get().map(|msg| view! {
                <Notice message=msg kind=NoticeKind::Success source=state.success />
            })}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn classes(self) -> (&'static str, &'static str) {
        match self {
            NoticeKind::Success => ("✓", "bg-green-50 border-green-400 text-green-800"),
            NoticeKind::Error => ("!", "bg-red-50 border-red-400 text-red-800"),
        }
    }
}

#[component]
fn Notice(
    message: String,
    kind: NoticeKind,
    /// Signal holding this message; cleared on dismiss
    source: RwSignal<Option<String>>,
) -> impl IntoView {
    let (icon, palette) = kind.classes();

    view! {
        <div
            role="alert"
            class=format!("flex items-start border-l-4 rounded-md shadow-md px-4 py-3 {}", palette)
        >
            <span class="font-bold mr-3">{icon}</span>
            <p class="flex-grow text-sm">{message}</p>
            <button
                on:click=move |_| source.set(None)
                class="ml-3 opacity-60 hover:opacity-100"
                aria-label="Dismiss"
            >
                "✕"
            </button>
        </div>
    }
}
