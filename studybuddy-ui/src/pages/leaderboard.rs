//! Leaderboard Page
//!
//! Top scorers of one subject: a podium for the first three, a table for
//! the rest of the top twenty and the viewer's own rank when they are
//! further down. The subject comes from the path (`/leaderboard/:subject_id`)
//! or the `subjectId` query parameter; without one a subject picker is shown.

use leptos::*;
use leptos_router::*;

use studybuddy::models::{
    board_rows, podium, shows_own_position, LeaderboardEntry, Subject, User,
};

use crate::api;
use crate::components::{Avatar, InlineLoading};

#[derive(Debug, Clone, PartialEq, Default)]
struct Board {
    subject: Option<Subject>,
    entries: Vec<LeaderboardEntry>,
    rank: Option<u32>,
    me: Option<User>,
}

#[component]
pub fn Leaderboard() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    let subject_id = create_memo(move |_| {
        params
            .with(|p| p.get("subject_id").cloned())
            .or_else(|| query.with(|q| q.get("subjectId").cloned()))
            .filter(|id| !id.is_empty())
    });

    view! {
        <div class="max-w-4xl mx-auto">
            {move || match subject_id.get() {
                Some(id) => view! { <SubjectBoard subject_id=id /> }.into_view(),
                None => view! { <SubjectPicker /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn SubjectPicker() -> impl IntoView {
    let subjects = create_local_resource(|| (), |_| async move { api::fetch_subjects().await });

    view! {
        <div class="bg-white rounded-xl shadow p-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">"Leaderboards"</h1>
            <Suspense fallback=|| view! { <InlineLoading /> }>
                {move || subjects.get().map(|result| match result {
                    Ok(list) if !list.is_empty() => view! {
                        <div class="grid md:grid-cols-2 gap-4">
                            {list.into_iter().map(|subject| view! {
                                <A
                                    href=format!("/leaderboard/{}", subject.id)
                                    class="p-4 border border-gray-200 rounded-lg hover:bg-indigo-50 transition-colors"
                                >
                                    <div class="font-medium text-gray-900">{subject.name}</div>
                                    <div class="text-sm text-gray-500">{subject.description}</div>
                                </A>
                            }).collect_view()}
                        </div>
                    }.into_view(),
                    Ok(_) => view! {
                        <p class="text-gray-500">"No subjects available."</p>
                    }.into_view(),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch subjects: {}", e).into());
                        view! { <p class="text-gray-500">"No subjects available."</p> }.into_view()
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn SubjectBoard(subject_id: String) -> impl IntoView {
    let (loading, set_loading) = create_signal(true);
    let board = create_rw_signal(Board::default());

    spawn_local(async move {
        let mut loaded = Board::default();

        match api::fetch_subject(&subject_id).await {
            Ok(subject) => loaded.subject = Some(subject),
            Err(e) => web_sys::console::error_1(&format!("Failed to fetch subject: {}", e).into()),
        }
        match api::fetch_leaderboard(&subject_id).await {
            Ok(entries) => loaded.entries = entries,
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch leaderboard: {}", e).into())
            }
        }
        match api::fetch_user_rank(&subject_id).await {
            Ok(rank) => loaded.rank = Some(rank.rank),
            Err(e) => web_sys::console::error_1(&format!("Failed to fetch rank: {}", e).into()),
        }
        match api::fetch_profile().await {
            Ok(user) => loaded.me = Some(user),
            Err(e) => web_sys::console::error_1(&format!("Failed to fetch profile: {}", e).into()),
        }

        board.set(loaded);
        set_loading.set(false);
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <InlineLoading /> }>
            {move || {
                let Board { subject, entries, rank, me } = board.get();
                let title = subject
                    .map(|s| format!("{} Leaderboard", s.name))
                    .unwrap_or_else(|| "Leaderboard".to_string());
                let my_id = me.as_ref().map(|u| u.id.clone());
                let is_me = move |entry: &LeaderboardEntry| my_id.as_deref() == Some(entry.user.id.as_str());

                view! {
                    <div class="space-y-8">
                        <div class="text-center">
                            <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
                            <p class="mt-2 text-gray-600">"See how you rank among the top performers"</p>
                        </div>

                        {if entries.is_empty() {
                            view! {
                                <p class="text-center text-gray-500">"No scores recorded yet."</p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="flex items-end justify-center gap-6">
                                    {podium(&entries).into_iter().map(|(place, entry)| {
                                        view! { <PodiumPlace place=place entry=entry.clone() /> }
                                    }).collect_view()}
                                </div>

                                <div class="bg-white rounded-xl shadow overflow-hidden">
                                    <table class="w-full">
                                        <tbody class="divide-y divide-gray-100">
                                            {board_rows(&entries).map(|(place, entry)| {
                                                let highlight = if is_me(entry) { "bg-indigo-50" } else { "" };
                                                view! {
                                                    <tr class=highlight>
                                                        <td class="px-6 py-4 w-16 font-semibold text-gray-500">{place}</td>
                                                        <td class="px-6 py-4">
                                                            <div class="flex items-center space-x-3">
                                                                <Avatar
                                                                    name=entry.user.name.clone()
                                                                    picture=entry.user.profile_picture.clone()
                                                                    size=32
                                                                />
                                                                <span class="text-gray-800">{entry.user.name.clone()}</span>
                                                            </div>
                                                        </td>
                                                        <td class="px-6 py-4 text-right font-medium text-gray-700">
                                                            {format!("{} pts", entry.score)}
                                                        </td>
                                                    </tr>
                                                }
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            }.into_view()
                        }}

                        {rank.filter(|r| shows_own_position(*r)).map(|r| {
                            let (name, picture, score) = me
                                .map(|u| (u.name, u.profile_picture, u.score))
                                .unwrap_or_default();
                            view! {
                                <div class="bg-indigo-50 border border-indigo-200 rounded-xl p-6">
                                    <h2 class="font-semibold text-indigo-800 mb-3">"Your Position"</h2>
                                    <div class="flex items-center space-x-4">
                                        <span class="text-2xl font-bold text-indigo-600">{format!("#{}", r)}</span>
                                        <Avatar name=name.clone() picture=picture size=40 />
                                        <span class="flex-grow text-gray-800">{name}</span>
                                        <span class="font-medium text-gray-700">{format!("{} pts", score)}</span>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </Show>
    }
}

/// Medal colour and column height for a podium place
fn podium_style(place: u32) -> (&'static str, &'static str) {
    match place {
        1 => ("bg-yellow-400", "h-40"),
        2 => ("bg-gray-300", "h-32"),
        _ => ("bg-amber-600", "h-24"),
    }
}

#[component]
fn PodiumPlace(place: u32, entry: LeaderboardEntry) -> impl IntoView {
    let (medal, height) = podium_style(place);

    view! {
        <div class="flex flex-col items-center">
            <Avatar
                name=entry.user.name.clone()
                picture=entry.user.profile_picture.clone()
                size={if place == 1 { 72 } else { 56 }}
            />
            <span class="mt-2 font-medium text-gray-900">{entry.user.name.clone()}</span>
            <span class="text-sm text-gray-500">{format!("{} pts", entry.score)}</span>
            <div class=format!("mt-3 w-24 rounded-t-lg flex items-start justify-center pt-3 {} {}", medal, height)>
                <span class="text-2xl font-bold text-white">{place}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_podium_style() {
        assert_eq!(podium_style(1).1, "h-40");
        assert_eq!(podium_style(2).0, "bg-gray-300");
        assert_eq!(podium_style(3).0, "bg-amber-600");
    }
}
