//! Login / Signup Page

use leptos::*;
use leptos_router::*;

use studybuddy::auth::{resolve_auth, AuthForm, AuthMode, UserType};

use crate::api;
use crate::state::use_global_state;

#[component]
pub fn Auth() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();
    let form = create_rw_signal(AuthForm::new(AuthMode::Login));
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let submission = match form.with_untracked(AuthForm::submission) {
            Ok(submission) => submission,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match resolve_auth(api::submit_auth(&submission).await) {
                Ok(token) => {
                    state.log_in(&token);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => state.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    let mode = create_memo(move |_| form.with(AuthForm::mode));
    let is_signup = move || mode.get() == AuthMode::Signup;

    view! {
        <div class="min-h-[80vh] flex items-center justify-center">
            <div class="w-full max-w-md bg-white rounded-xl shadow p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-gray-900">{move || mode.get().heading()}</h1>
                    <p class="mt-2 text-gray-600">
                        {move || if is_signup() {
                            "Start learning smarter with StudyBuddy AI"
                        } else {
                            "Log in to continue your learning journey"
                        }}
                    </p>
                </div>

                <button
                    type="button"
                    on:click=move |_| api::redirect_to_google()
                    class="w-full py-2 border border-gray-300 rounded-md flex items-center justify-center space-x-2 hover:bg-gray-50"
                >
                    <span class="font-bold text-red-500">"G"</span>
                    <span>{move || format!("{} with Google", mode.get().title())}</span>
                </button>

                <div class="flex items-center">
                    <div class="flex-grow border-t border-gray-200" />
                    <span class="px-3 text-sm text-gray-400">"or"</span>
                    <div class="flex-grow border-t border-gray-200" />
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=is_signup>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"Full Name"</label>
                            <input
                                type="text"
                                placeholder="Your name"
                                prop:value=move || form.with(|f| f.full_name.clone())
                                on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500"
                            />
                        </div>
                    </Show>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Email"</label>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Password"</label>
                        <div class="relative">
                            <input
                                type=move || if form.with(|f| f.show_password) { "text" } else { "password" }
                                placeholder="••••••••"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                class="w-full px-3 py-2 pr-16 border border-gray-300 rounded-md focus:ring-indigo-500 focus:border-indigo-500"
                            />
                            <button
                                type="button"
                                on:click=move |_| form.update(AuthForm::toggle_password_visibility)
                                class="absolute inset-y-0 right-0 px-3 text-sm text-gray-500"
                            >
                                {move || if form.with(|f| f.show_password) { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <Show
                        when=is_signup
                        fallback=move || view! {
                            <div class="flex items-center justify-between text-sm">
                                <label class="flex items-center space-x-2">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.remember_me)
                                        on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                                    />
                                    <span>"Remember me"</span>
                                </label>
                                <a href="#" class="text-indigo-600 hover:underline">"Forgot password?"</a>
                            </div>
                        }
                    >
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">"I am a"</label>
                            <select
                                on:change=move |ev| {
                                    match event_target_value(&ev).parse::<UserType>() {
                                        Ok(user_type) => form.update(|f| f.user_type = user_type),
                                        Err(e) => state.show_error(&e.to_string()),
                                    }
                                }
                                class="w-full px-3 py-2 border border-gray-300 rounded-md"
                            >
                                <option value="student" selected=move || form.with(|f| f.user_type == UserType::Student)>
                                    "Student"
                                </option>
                                <option value="teacher" selected=move || form.with(|f| f.user_type == UserType::Teacher)>
                                    "Teacher"
                                </option>
                            </select>
                        </div>
                        <label class="flex items-start space-x-2 text-sm">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.accept_terms)
                                on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                            />
                            <span>"I agree to the Terms of Service and Privacy Policy"</span>
                        </label>
                    </Show>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-md font-medium \
                               disabled:bg-gray-300 disabled:cursor-not-allowed transition-colors"
                    >
                        {move || if submitting.get() { "Please wait...".to_string() } else { mode.get().title().to_string() }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600">
                    {move || if is_signup() { "Already have an account? " } else { "Don't have an account? " }}
                    <button
                        type="button"
                        on:click=move |_| form.update(AuthForm::toggle_mode)
                        class="text-indigo-600 font-medium hover:underline"
                    >
                        {move || mode.get().toggled().title()}
                    </button>
                </p>
            </div>
        </div>
    }
}
