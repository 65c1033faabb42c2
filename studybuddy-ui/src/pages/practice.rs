//! Practice Quiz Page
//!
//! The ten-question machine learning set with hints, immediate checking
//! and explanations, against a 10 minute clock.

use leptos::*;
use leptos_router::*;

use studybuddy::mock;
use studybuddy::session::{PracticeSession, PracticeTick};

use crate::state::{use_global_state, use_ticker};

#[component]
pub fn Practice() -> impl IntoView {
    let state = use_global_state();
    let session = create_rw_signal(PracticeSession::new(mock::practice_questions()));

    use_ticker(move || {
        if !session.with_untracked(PracticeSession::in_progress) {
            return;
        }
        let mut tick = PracticeTick::Idle;
        session.update(|s| tick = s.tick());
        if tick == PracticeTick::TimeUp {
            state.show_error("Time's up!");
        }
    });

    // Memoised so clock ticks don't rebuild the screen
    let phase = create_memo(move |_| {
        session.with(|s| (s.is_started(), s.is_completed()))
    });

    view! {
        <div class="max-w-3xl mx-auto">
            <div class="bg-white rounded-xl shadow p-8">
                {move || match phase.get() {
                    (false, _) => view! { <Intro session=session /> }.into_view(),
                    (true, true) => view! { <Results session=session /> }.into_view(),
                    (true, false) => view! { <QuestionCard session=session /> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Intro(session: RwSignal<PracticeSession>) -> impl IntoView {
    view! {
        <div class="text-center space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Machine Learning Quiz"</h1>
            <p class="text-gray-600">
                "Test your knowledge on Supervised Learning, Unsupervised Learning, and Reinforcement Learning."
            </p>
            <div class="bg-indigo-50 rounded-lg p-6 text-left">
                <h2 class="font-semibold text-indigo-800 mb-2">"Quiz Details:"</h2>
                <ul class="space-y-1 text-indigo-700">
                    <li>"• 10 questions covering key machine learning concepts"</li>
                    <li>"• Topics include classification, regression, clustering, and more"</li>
                    <li>"• 10 minutes time limit"</li>
                    <li>"• Explanations provided for each answer"</li>
                </ul>
            </div>
            <button
                on:click=move |_| session.update(PracticeSession::start)
                class="px-8 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
            >
                "Start Quiz"
            </button>
        </div>
    }
}

/// Classes for one option given the selection and check state
fn option_class(selected: bool, checked: bool, correct: bool) -> &'static str {
    match (selected, checked, correct) {
        (true, true, true) | (false, true, true) => "bg-green-100 border-green-500",
        (true, true, false) => "bg-red-100 border-red-500",
        (true, false, _) => "bg-indigo-100 border-indigo-500",
        _ => "hover:bg-gray-50 border-gray-200",
    }
}

#[component]
fn QuestionCard(session: RwSignal<PracticeSession>) -> impl IntoView {
    let state = use_global_state();

    let check = move |_| {
        let mut result = Ok(());
        session.update(|s| result = s.check().map(|_| ()));
        if let Err(e) = result {
            state.show_error(&e.to_string());
        }
    };

    let card = create_memo(move |_| {
        session.with(|s| {
            (
                s.current_question().cloned(),
                s.current_index(),
                s.questions().len(),
                s.selected(),
                s.is_checked(),
                s.hint_visible(),
                s.is_last(),
            )
        })
    });

    view! {
        {move || {
            let (question, index, total, selected, checked, hint_visible, is_last) = card.get();
            let Some(question) = question else {
                return view! { <p class="text-gray-500">"No questions available."</p> }.into_view();
            };

            view! {
                <div class="space-y-6">
                    <div class="flex justify-between text-sm text-gray-500">
                        <span>{format!("Question {}/{}", index + 1, total)}</span>
                        <span>{move || format!("Time Remaining: {}", session.with(PracticeSession::clock))}</span>
                    </div>
                    <span class="inline-block px-3 py-1 rounded-full bg-indigo-100 text-indigo-700 text-sm">
                        {question.category.clone()}
                    </span>
                    <h2 class="text-xl font-semibold text-gray-900">{question.prompt.clone()}</h2>

                    <div class="space-y-3">
                        {question.options.iter().enumerate().map(|(i, option)| {
                            let correct = question.is_correct(i);
                            let is_selected = selected == Some(i);
                            let marker = match (checked, correct, is_selected) {
                                (true, true, _) => "✓",
                                (true, false, true) => "✕",
                                _ => "",
                            };
                            view! {
                                <div
                                    on:click=move |_| session.update(|s| s.select(i))
                                    class=format!(
                                        "p-4 border rounded-lg cursor-pointer transition-colors flex items-center space-x-3 {}",
                                        option_class(is_selected, checked, correct)
                                    )
                                >
                                    <span class="w-5 text-center font-bold">{marker}</span>
                                    <span>{option.clone()}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>

                    {checked.then(|| view! {
                        <div class="bg-blue-50 border border-blue-200 rounded-lg p-4">
                            <h3 class="font-semibold text-blue-800">"Explanation"</h3>
                            <p class="text-blue-700">{question.explanation.clone().unwrap_or_default()}</p>
                        </div>
                    })}

                    {hint_visible.then(|| view! {
                        <div class="bg-yellow-50 border border-yellow-200 rounded-lg p-4">
                            <h3 class="font-semibold text-yellow-800">"Hint"</h3>
                            <p class="text-yellow-700">{question.hint.clone().unwrap_or_default()}</p>
                        </div>
                    })}

                    <div class="flex justify-between">
                        {if !checked {
                            view! {
                                <button
                                    on:click=move |_| session.update(PracticeSession::toggle_hint)
                                    class="px-4 py-2 text-indigo-600 hover:bg-indigo-50 rounded-md"
                                >
                                    {if hint_visible { "Hide Hint" } else { "Show Hint" }}
                                </button>
                                <button
                                    on:click=check
                                    disabled=selected.is_none()
                                    class="px-4 py-2 rounded-md bg-indigo-600 text-white hover:bg-indigo-700 \
                                           disabled:bg-gray-200 disabled:text-gray-500 disabled:cursor-not-allowed transition-colors"
                                >
                                    "Check Answer"
                                </button>
                            }.into_view()
                        } else {
                            view! {
                                <span />
                                <button
                                    on:click=move |_| session.update(PracticeSession::next)
                                    class="px-4 py-2 rounded-md bg-indigo-600 text-white hover:bg-indigo-700 transition-colors"
                                >
                                    {if is_last { "Finish Quiz" } else { "Next Question →" }}
                                </button>
                            }.into_view()
                        }}
                    </div>
                </div>
            }.into_view()
        }}
    }
}

#[component]
fn Results(session: RwSignal<PracticeSession>) -> impl IntoView {
    let navigate = use_navigate();
    let (score, total, percentage, grade) = session.with_untracked(|s| {
        (s.score(), s.questions().len(), s.percentage(), s.grade())
    });
    let bar_class = if percentage >= 70 {
        "bg-green-500"
    } else if percentage >= 50 {
        "bg-yellow-500"
    } else {
        "bg-red-500"
    };

    view! {
        <div class="text-center space-y-6">
            <div class="text-6xl">"🏆"</div>
            <h2 class="text-2xl font-bold text-gray-900">"Quiz Completed!"</h2>
            <p class="text-gray-700">{grade.message()}</p>
            <div>
                <div class="text-4xl font-bold text-indigo-600">{format!("{} / {}", score, total)}</div>
                <div class="text-gray-500">{format!("{}% Score", percentage)}</div>
                <div class="w-full bg-gray-200 rounded-full h-4 mt-4">
                    <div
                        class=format!("h-4 rounded-full {}", bar_class)
                        style=format!("width: {}%", percentage)
                    />
                </div>
            </div>
            <div class="flex justify-center gap-4">
                <button
                    on:click=move |_| session.update(PracticeSession::reset)
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium"
                >
                    "↺ Try Again"
                </button>
                <button
                    on:click=move |_| navigate("/upload", Default::default())
                    class="px-6 py-3 border border-gray-300 hover:bg-gray-50 rounded-lg font-medium"
                >
                    "Back to Uploads"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_class() {
        assert_eq!(option_class(true, false, false), "bg-indigo-100 border-indigo-500");
        assert_eq!(option_class(true, true, false), "bg-red-100 border-red-500");
        assert_eq!(option_class(false, true, true), "bg-green-100 border-green-500");
        assert_eq!(option_class(false, true, false), "hover:bg-gray-50 border-gray-200");
    }
}
