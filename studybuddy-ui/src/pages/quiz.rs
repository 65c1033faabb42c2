//! Topic Quiz Page
//!
//! Subject and topic selection, the timed quiz itself and the review of
//! every answer once it has been submitted.

use leptos::*;
use leptos_router::*;

use studybuddy::models::{option_letter, Question, Subject, Topic};
use studybuddy::session::{AnswerStatus, OptionMark, QuizSession, QuizStep, QuizTick, ScoreReport};

use crate::api;
use crate::components::InlineLoading;
use crate::state::{use_global_state, use_ticker};

#[component]
pub fn Quiz() -> impl IntoView {
    let state = use_global_state();
    let session = create_rw_signal(QuizSession::new());

    // Load subjects on mount
    create_effect(move |_| {
        session.update(|s| s.set_loading(true));
        spawn_local(async move {
            match api::fetch_subjects().await {
                Ok(subjects) => session.update(|s| s.set_subjects(subjects)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load subjects: {}", e).into())
                }
            }
            session.update(|s| s.set_loading(false));
        });
    });

    use_ticker(move || {
        if session.with_untracked(QuizSession::step) != QuizStep::Quiz {
            return;
        }
        let mut tick = QuizTick::Idle;
        session.update(|s| tick = s.tick(chrono::Utc::now()));
        if let QuizTick::Submitted(_) = tick {
            state.show_error("Time's up! Your quiz has been submitted.");
        }
    });

    let step = create_memo(move |_| session.with(QuizSession::step));

    view! {
        <div class="max-w-4xl mx-auto">
            {move || match step.get() {
                QuizStep::Select => view! { <SelectStep session=session /> }.into_view(),
                QuizStep::Quiz => view! { <QuizStepView session=session /> }.into_view(),
                QuizStep::Result => view! { <ResultStep session=session /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn SelectStep(session: RwSignal<QuizSession>) -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let choose_subject = move |subject: Subject| {
        let subject_id = subject.id.clone();
        session.update(|s| {
            s.select_subject(subject);
            s.set_topics(Vec::new());
        });
        spawn_local(async move {
            match api::fetch_topics(&subject_id).await {
                Ok(topics) => session.update(|s| s.set_topics(topics)),
                Err(e) => web_sys::console::error_1(&format!("Failed to load topics: {}", e).into()),
            }
        });
    };

    let start_quiz = move |_| {
        let Some(topic_id) = session.with_untracked(|s| s.selected_topic().map(|t| t.id.clone()))
        else {
            return;
        };
        session.update(|s| s.set_loading(true));
        spawn_local(async move {
            match api::fetch_random_questions(&topic_id).await {
                Ok(questions) => {
                    let mut result = Ok(());
                    session.update(|s| result = s.begin(questions, chrono::Utc::now()));
                    if let Err(e) = result {
                        state.show_error(&e.to_string());
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load questions: {}", e).into())
                }
            }
            session.update(|s| s.set_loading(false));
        });
    };

    let selection = create_memo(move |_| {
        session.with(|s| {
            (
                s.subjects().to_vec(),
                s.selected_subject().cloned(),
                s.topics().to_vec(),
                s.selected_topic().cloned(),
                s.is_loading(),
                s.can_start(),
            )
        })
    });

    view! {
        <div class="bg-white rounded-xl shadow p-8 space-y-8">
            <h1 class="text-3xl font-bold text-gray-900">"Start a Quiz"</h1>

            {move || {
                let (subjects, subject, topics, topic, loading, can_start) = selection.get();
                if loading && subjects.is_empty() {
                    return view! { <InlineLoading /> }.into_view();
                }

                view! {
                    <div class="space-y-8">
                        <div>
                            <h2 class="text-lg font-semibold text-gray-800 mb-3">"Select a Subject"</h2>
                            {if subjects.is_empty() {
                                view! {
                                    <p class="text-gray-500">"No subjects available. Please add subjects first."</p>
                                }.into_view()
                            } else {
                                view! {
                                    <div class="grid md:grid-cols-3 gap-4">
                                        {subjects.into_iter().map(|s| {
                                            let active = subject.as_ref().map(|c| c.id == s.id).unwrap_or(false);
                                            let name = s.name.clone();
                                            let description = s.description.clone();
                                            view! {
                                                <button
                                                    on:click=move |_| choose_subject(s.clone())
                                                    class=format!(
                                                        "p-4 border rounded-lg text-left transition-colors {}",
                                                        selectable_class(active)
                                                    )
                                                >
                                                    <div class="font-medium text-gray-900">{name}</div>
                                                    <div class="text-sm text-gray-500">{description}</div>
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                }.into_view()
                            }}
                        </div>

                        {subject.is_some().then(|| view! {
                            <TopicPicker session=session topics=topics selected=topic />
                        })}

                        <div class="flex justify-between">
                            <button
                                on:click={
                                    let navigate = navigate.clone();
                                    move |_| navigate("/dashboard", Default::default())
                                }
                                class="px-4 py-2 border border-gray-300 rounded-md hover:bg-gray-50"
                            >
                                "Back to Dashboard"
                            </button>
                            <button
                                on:click=start_quiz
                                disabled={!can_start}
                                class="px-6 py-2 rounded-md bg-indigo-600 text-white hover:bg-indigo-700 \
                                       disabled:bg-gray-200 disabled:text-gray-500 disabled:cursor-not-allowed transition-colors"
                            >
                                {if loading { "Loading..." } else { "Start Quiz" }}
                            </button>
                        </div>
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn TopicPicker(
    session: RwSignal<QuizSession>,
    topics: Vec<Topic>,
    selected: Option<Topic>,
) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-lg font-semibold text-gray-800 mb-3">"Select a Topic"</h2>
            {if topics.is_empty() {
                view! {
                    <p class="text-gray-500">
                        "No topics available for this subject. Please select another subject."
                    </p>
                }.into_view()
            } else {
                view! {
                    <div class="grid md:grid-cols-3 gap-4">
                        {topics.into_iter().map(|t| {
                            let active = selected.as_ref().map(|c| c.id == t.id).unwrap_or(false);
                            let name = t.name.clone();
                            view! {
                                <button
                                    on:click=move |_| session.update(|s| s.select_topic(t.clone()))
                                    class=format!(
                                        "p-4 border rounded-lg text-left transition-colors {}",
                                        selectable_class(active)
                                    )
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

fn selectable_class(active: bool) -> &'static str {
    if active {
        "border-indigo-500 bg-indigo-50"
    } else {
        "border-gray-200 hover:bg-gray-50"
    }
}

#[component]
fn QuizStepView(session: RwSignal<QuizSession>) -> impl IntoView {
    let state = use_global_state();

    let submit = move |_| {
        let mut result = None;
        session.update(|s| result = Some(s.submit(chrono::Utc::now())));
        if let Some(Err(e)) = result {
            state.show_error(&e.to_string());
        }
    };

    let title = session.with_untracked(|s| {
        s.selected_topic()
            .map(|t| format!("{} Quiz", t.name))
            .unwrap_or_else(|| "Quiz".to_string())
    });

    let card = create_memo(move |_| {
        session.with(|s| {
            let current = s.current_question().cloned();
            let selection = current
                .as_ref()
                .and_then(|q| s.answers().selection(&q.id));
            let answered: Vec<bool> = s
                .questions()
                .iter()
                .map(|q| s.answers().is_answered(&q.id))
                .collect();
            (
                current,
                selection,
                s.current_index(),
                s.questions().len(),
                s.answered_count(),
                s.progress_percent(),
                s.is_last(),
                answered,
            )
        })
    });

    view! {
        <div class="bg-white rounded-xl shadow p-8 space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
                <span class="font-mono text-lg text-indigo-600">
                    {move || format!("⏱ {}", session.with(QuizSession::clock))}
                </span>
            </div>

            {move || {
                let (question, selection, index, total, answered, progress, is_last, answered_flags) =
                    card.get();
                let Some(question) = question else {
                    return view! { <p class="text-gray-500">"No question to show."</p> }.into_view();
                };

                view! {
                    <div class="space-y-6">
                        <div class="flex justify-between text-sm text-gray-500">
                            <span>{format!("Question {} of {}", index + 1, total)}</span>
                            <span>{format!("{} of {} answered", answered, total)}</span>
                        </div>
                        <div class="w-full bg-gray-200 rounded-full h-2">
                            <div class="bg-indigo-600 h-2 rounded-full" style=format!("width: {:.0}%", progress) />
                        </div>

                        <h2 class="text-xl font-semibold text-gray-900">{question.prompt.clone()}</h2>
                        <div class="space-y-3">
                            {question.options.iter().enumerate().map(|(i, option)| {
                                let picked = selection == Some(i);
                                view! {
                                    <button
                                        on:click=move |_| session.update(|s| s.answer_current(i))
                                        class=format!(
                                            "w-full p-4 border rounded-lg text-left flex items-center space-x-3 transition-colors {}",
                                            selectable_class(picked)
                                        )
                                    >
                                        <span class="w-8 h-8 rounded-full bg-gray-100 flex items-center justify-center font-semibold">
                                            {option_letter(i).to_string()}
                                        </span>
                                        <span>{option.clone()}</span>
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        <div class="flex justify-between">
                            <button
                                on:click=move |_| session.update(QuizSession::previous)
                                disabled={index == 0}
                                class="px-4 py-2 border border-gray-300 rounded-md hover:bg-gray-50 disabled:opacity-50"
                            >
                                "Previous"
                            </button>
                            {if is_last {
                                view! {
                                    <button
                                        on:click=submit
                                        class="px-6 py-2 rounded-md bg-green-600 text-white hover:bg-green-700"
                                    >
                                        "Submit Quiz"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <button
                                        on:click=move |_| session.update(QuizSession::next)
                                        class="px-6 py-2 rounded-md bg-indigo-600 text-white hover:bg-indigo-700"
                                    >
                                        "Next"
                                    </button>
                                }.into_view()
                            }}
                        </div>

                        <div class="flex flex-wrap gap-2 pt-4 border-t">
                            {answered_flags.into_iter().enumerate().map(|(i, done)| {
                                let class = if i == index {
                                    "bg-indigo-600 text-white"
                                } else if done {
                                    "bg-indigo-100 text-indigo-700"
                                } else {
                                    "bg-gray-100 text-gray-600"
                                };
                                view! {
                                    <button
                                        on:click=move |_| session.update(|s| s.jump(i))
                                        class=format!("w-10 h-10 rounded-md font-medium {}", class)
                                    >
                                        {i + 1}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Classes for an option on the review screen
fn mark_class(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Correct => "bg-green-50 border-green-500 text-green-800",
        OptionMark::WrongPick => "bg-red-50 border-red-500 text-red-800",
        OptionMark::Neutral => "border-gray-200",
    }
}

fn status_badge(status: AnswerStatus) -> (&'static str, &'static str) {
    match status {
        AnswerStatus::Correct => ("Correct", "bg-green-100 text-green-700"),
        AnswerStatus::Incorrect => ("Incorrect", "bg-red-100 text-red-700"),
        AnswerStatus::Unanswered => ("Unanswered", "bg-gray-100 text-gray-600"),
    }
}

#[component]
fn ResultStep(session: RwSignal<QuizSession>) -> impl IntoView {
    let navigate = use_navigate();

    let (report, topic, subject, time_taken, review) = session.with_untracked(|s| {
        let review: Vec<(Question, AnswerStatus, Vec<OptionMark>)> = s
            .questions()
            .iter()
            .map(|q| {
                let marks = (0..q.options.len())
                    .map(|i| s.answers().option_mark(q, i))
                    .collect();
                (q.clone(), s.answers().status(q), marks)
            })
            .collect();
        (
            s.report().unwrap_or(ScoreReport {
                correct: 0,
                incorrect: 0,
                unanswered: 0,
                total: 0,
                percentage: 0,
            }),
            s.selected_topic().map(|t| t.name.clone()).unwrap_or_default(),
            s.selected_subject().map(|t| t.name.clone()).unwrap_or_default(),
            s.time_taken(),
            review,
        )
    });

    view! {
        <div class="space-y-8">
            <div class="bg-white rounded-xl shadow p-8 text-center space-y-4">
                <h1 class="text-3xl font-bold text-gray-900">"Quiz Completed!"</h1>
                <div class="text-5xl font-bold text-indigo-600">{format!("{}%", report.percentage)}</div>
                <p class="text-lg text-gray-700">{report.verdict().message()}</p>
                <div class="grid grid-cols-3 gap-4 pt-4">
                    <div>
                        <div class="text-2xl font-bold text-green-600">{report.correct}</div>
                        <div class="text-sm text-gray-500">"Correct"</div>
                    </div>
                    <div>
                        <div class="text-2xl font-bold text-red-600">{report.incorrect}</div>
                        <div class="text-sm text-gray-500">"Incorrect"</div>
                    </div>
                    <div>
                        <div class="text-2xl font-bold text-gray-600">{report.unanswered}</div>
                        <div class="text-sm text-gray-500">"Unanswered"</div>
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-xl shadow p-6">
                <h2 class="text-xl font-semibold text-gray-900 mb-4">"Quiz Summary"</h2>
                <dl class="grid grid-cols-2 gap-4 text-sm">
                    <dt class="text-gray-500">"Topic"</dt><dd class="font-medium">{topic}</dd>
                    <dt class="text-gray-500">"Subject"</dt><dd class="font-medium">{subject}</dd>
                    <dt class="text-gray-500">"Time Taken"</dt><dd class="font-medium">{time_taken}</dd>
                    <dt class="text-gray-500">"Questions"</dt><dd class="font-medium">{report.total}</dd>
                </dl>
            </div>

            <div class="bg-white rounded-xl shadow p-6 space-y-6">
                <h2 class="text-xl font-semibold text-gray-900">"Review Your Answers"</h2>
                {review.into_iter().enumerate().map(|(n, (question, status, marks))| {
                    let (label, badge) = status_badge(status);
                    view! {
                        <div class="border-b pb-6 last:border-0">
                            <div class="flex justify-between items-start mb-3">
                                <h3 class="font-medium text-gray-900">
                                    {format!("{}. {}", n + 1, question.prompt)}
                                </h3>
                                <span class=format!("px-2 py-1 rounded text-xs font-medium {}", badge)>{label}</span>
                            </div>
                            <div class="space-y-2">
                                {question.options.iter().zip(marks).enumerate().map(|(i, (option, mark))| view! {
                                    <div class=format!("p-3 border rounded-md {}", mark_class(mark))>
                                        {format!("{}. {}", option_letter(i), option)}
                                    </div>
                                }).collect_view()}
                            </div>
                            {question.explanation.clone().map(|text| view! {
                                <p class="mt-3 text-sm text-gray-600">
                                    <span class="font-semibold">"Explanation: "</span>{text}
                                </p>
                            })}
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="flex justify-center gap-4">
                <button
                    on:click=move |_| session.update(QuizSession::restart)
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium"
                >
                    "Try Another Quiz"
                </button>
                <button
                    on:click=move |_| navigate("/dashboard", Default::default())
                    class="px-6 py-3 border border-gray-300 hover:bg-gray-50 rounded-lg font-medium"
                >
                    "Back to Dashboard"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_classes() {
        assert!(mark_class(OptionMark::Correct).contains("green"));
        assert!(mark_class(OptionMark::WrongPick).contains("red"));
        assert_eq!(status_badge(AnswerStatus::Unanswered).0, "Unanswered");
    }
}
