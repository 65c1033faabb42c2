//! Navigation Component
//!
//! Header navigation bar with logo, page links and the login state.

use leptos::*;
use leptos_router::*;

use crate::state::use_global_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_global_state();

    view! {
        <nav class="bg-white border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🎓"</span>
                        <span class="text-xl font-bold text-indigo-600">"StudyBuddy AI"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/dashboard" label="Dashboard" />
                        <NavLink href="/quiz" label="Quiz" />
                        <NavLink href="/exam" label="Exams" />
                        <NavLink href="/practiceQuestion" label="Practice" />
                        <NavLink href="/upload" label="Upload" />

                        {move || {
                            if state.logged_in.get() {
                                view! {
                                    <button
                                        on:click=move |_| state.log_out()
                                        class="ml-4 px-4 py-2 rounded-lg text-gray-600 hover:bg-gray-100 transition-colors"
                                    >
                                        "Log out"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <A
                                        href="/auth"
                                        class="ml-4 px-4 py-2 rounded-lg bg-indigo-600 text-white hover:bg-indigo-700 transition-colors"
                                    >
                                        "Log in"
                                    </A>
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-indigo-600 hover:bg-gray-100 transition-colors"
            active_class="bg-indigo-50 text-indigo-700"
        >
            {label}
        </A>
    }
}
