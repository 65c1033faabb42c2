//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Auth, Dashboard, Exam, Home, Leaderboard, Practice, Quiz, Upload};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                <Nav />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/auth" view=|| view! { <Padded><Auth /></Padded> } />
                        <Route path="/dashboard" view=|| view! { <Padded><Dashboard /></Padded> } />
                        <Route path="/quiz" view=|| view! { <Padded><Quiz /></Padded> } />
                        <Route path="/exam" view=|| view! { <Padded><Exam /></Padded> } />
                        <Route path="/practiceQuestion" view=|| view! { <Padded><Practice /></Padded> } />
                        <Route path="/practice" view=|| view! { <Padded><Practice /></Padded> } />
                        <Route path="/upload" view=|| view! { <Padded><Upload /></Padded> } />
                        <Route path="/leaderboard" view=|| view! { <Padded><Leaderboard /></Padded> } />
                        <Route path="/leaderboard/:subject_id" view=|| view! { <Padded><Leaderboard /></Padded> } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Page container; the landing page runs full width instead
#[component]
fn Padded(children: Children) -> impl IntoView {
    view! { <div class="container mx-auto px-4 py-8">{children()}</div> }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
