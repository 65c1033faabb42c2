//! Dashboard Page
//!
//! Profile greeting, study counters, subjects in progress, recent activity
//! and shortcuts to the study tools.

use leptos::*;
use leptos_router::*;

use studybuddy::mock;
use studybuddy::models::{Activity, Subject, User, UserStats};

use crate::api;
use crate::components::{Avatar, Loading};

/// Rows shown in the subject and activity panels
const PANEL_ROWS: usize = 5;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (loading, set_loading) = create_signal(true);
    let user = create_rw_signal(None::<User>);
    let subjects = create_rw_signal(Vec::<Subject>::new());
    let activity = create_rw_signal(Vec::<Activity>::new());
    let stats = create_rw_signal(UserStats::default());

    // Fetch everything on mount; failures leave the panel empty
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(profile) => user.set(Some(profile)),
                Err(e) => web_sys::console::error_1(&format!("Failed to fetch profile: {}", e).into()),
            }

            match api::fetch_subjects().await {
                Ok(list) => subjects.set(list),
                Err(e) => web_sys::console::error_1(&format!("Failed to fetch subjects: {}", e).into()),
            }

            match api::fetch_activity().await {
                Ok(list) => activity.set(list),
                Err(e) => web_sys::console::error_1(&format!("Failed to fetch activity: {}", e).into()),
            }

            match api::fetch_stats().await {
                Ok(counters) => stats.set(counters),
                Err(e) => web_sys::console::error_1(&format!("Failed to fetch stats: {}", e).into()),
            }

            set_loading.set(false);
        });
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
            <div class="space-y-8">
                <Greeting user=user />
                <StatsRow stats=stats />
                <div class="grid lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 space-y-8">
                        <SubjectsPanel subjects=subjects />
                        <ActivityPanel activity=activity />
                    </div>
                    <div class="space-y-8">
                        <TopPerformers />
                        <QuickActions />
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn Greeting(user: RwSignal<Option<User>>) -> impl IntoView {
    let today = chrono::Local::now().format("%A, %B %-d, %Y").to_string();

    view! {
        <div class="flex items-center justify-between bg-white rounded-xl shadow p-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">
                    {move || format!(
                        "Welcome back, {}!",
                        user.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| "User".to_string()))
                    )}
                </h1>
                <p class="text-gray-500">{today}</p>
            </div>
            {move || {
                let (name, picture) = user.with(|u| {
                    u.as_ref()
                        .map(|u| (u.name.clone(), u.profile_picture.clone()))
                        .unwrap_or_default()
                });
                view! { <Avatar name=name picture=picture size=48 /> }
            }}
        </div>
    }
}

#[component]
fn StatsRow(stats: RwSignal<UserStats>) -> impl IntoView {
    let card = |label: &'static str, icon: &'static str, value: Signal<String>| {
        view! {
            <div class="bg-white rounded-xl shadow p-6 flex items-center space-x-4">
                <div class="w-12 h-12 rounded-lg bg-indigo-100 flex items-center justify-center text-2xl">
                    {icon}
                </div>
                <div>
                    <div class="text-sm text-gray-500">{label}</div>
                    <div class="text-2xl font-bold text-gray-900">{move || value.get()}</div>
                </div>
            </div>
        }
    };

    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
            {card("Questions Answered", "❓", Signal::derive(move || stats.get().questions_answered.to_string()))}
            {card("Topics Completed", "✅", Signal::derive(move || stats.get().topics_completed.to_string()))}
            {card("Study Time", "⏱", Signal::derive(move || format!("{} hrs", stats.get().study_time)))}
            {card("Current Streak", "🔥", Signal::derive(move || format!("{} days", stats.get().streak)))}
        </div>
    }
}

#[component]
fn SubjectsPanel(subjects: RwSignal<Vec<Subject>>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">"My Subjects"</h2>
            {move || {
                let list = subjects.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-gray-500">
                            "No subjects found. Start by adding some subjects to your study plan."
                        </p>
                    }.into_view();
                }
                list.into_iter().take(PANEL_ROWS).map(|subject| {
                    let progress = subject.progress_percent();
                    view! {
                        <div class="py-3">
                            <div class="flex justify-between mb-1">
                                <span class="font-medium text-gray-800">{subject.name}</span>
                                <span class="text-sm text-gray-500">{format!("{}%", progress)}</span>
                            </div>
                            <div class="w-full bg-gray-200 rounded-full h-2">
                                <div class="bg-indigo-600 h-2 rounded-full" style=format!("width: {}%", progress) />
                            </div>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn ActivityPanel(activity: RwSignal<Vec<Activity>>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">"Recent Activity"</h2>
            {move || {
                let list = activity.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-gray-500">
                            "No recent activity. Start studying to see your activity here."
                        </p>
                    }.into_view();
                }
                view! {
                    <ul class="divide-y divide-gray-100">
                        {list.into_iter().take(PANEL_ROWS).map(|item| view! {
                            <li class="py-3 flex items-center space-x-3">
                                <span class="text-xl">{item.kind.icon()}</span>
                                <div>
                                    <p class="text-gray-800">{item.description}</p>
                                    {item.timestamp.map(|t| view! {
                                        <p class="text-xs text-gray-400">{t}</p>
                                    })}
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn TopPerformers() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">"Top Performers"</h2>
            <ul class="space-y-3">
                {mock::top_performers().into_iter().enumerate().map(|(i, entry)| view! {
                    <li class="flex items-center space-x-3">
                        <span class="w-6 text-gray-500 font-semibold">{i + 1}</span>
                        <Avatar name=entry.user.name.clone() picture=entry.user.profile_picture.clone() size=32 />
                        <span class="flex-grow text-gray-800">{entry.user.name}</span>
                        <span class="text-sm text-gray-500">{format!("{} pts", entry.score)}</span>
                    </li>
                }).collect_view()}
            </ul>
            <A href="/leaderboard" class="block mt-4 text-center text-indigo-600 hover:underline">
                "View Leaderboard"
            </A>
        </div>
    }
}

#[component]
fn QuickActions() -> impl IntoView {
    let actions = [
        ("/quiz", "📝", "Take a Quiz"),
        ("/practiceQuestion", "🎯", "Practice Questions"),
        ("/exam", "⏱", "Exam Simulation"),
        ("/upload", "📤", "Upload Materials"),
    ];

    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">"Quick Actions"</h2>
            <div class="grid grid-cols-2 gap-3">
                {actions.into_iter().map(|(href, icon, label)| view! {
                    <A
                        href=href
                        class="p-4 border border-gray-200 rounded-lg text-center hover:bg-indigo-50 transition-colors"
                    >
                        <div class="text-2xl">{icon}</div>
                        <div class="text-sm font-medium text-gray-700">{label}</div>
                    </A>
                }).collect_view()}
            </div>
        </div>
    }
}
