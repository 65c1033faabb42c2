//! Exam Simulation Page
//!
//! Pick an exam and sit it against the clock. The countdown ends the exam
//! when it runs out; the student can also end it early.

use leptos::*;

use studybuddy::mock;
use studybuddy::models::Exam as ExamInfo;
use studybuddy::session::{ExamEvent, ExamSession, TIME_UP_MESSAGE};

use crate::state::{use_global_state, use_ticker};

/// Title of the exam being sat, `None` on the picker
fn running_title(session: &ExamSession) -> Option<String> {
    session
        .is_running()
        .then(|| session.selected().map(|e| e.title.clone()).unwrap_or_default())
}

#[component]
pub fn Exam() -> impl IntoView {
    let state = use_global_state();
    let session = create_rw_signal(ExamSession::new(mock::exams()));

    use_ticker(move || {
        if !session.with_untracked(ExamSession::is_running) {
            return;
        }
        let mut event = ExamEvent::Idle;
        session.update(|s| event = s.tick());
        if let ExamEvent::TimeUp(_) = event {
            state.show_error(TIME_UP_MESSAGE);
        }
    });

    // Only the clock text follows every tick
    let running = create_memo(move |_| session.with(running_title));

    let start_exam = move |exam: ExamInfo| session.update(|s| s.start(exam));
    let end_exam = move |_| {
        session.update(|s| {
            s.end();
        });
    };

    view! {
        <div class="max-w-4xl mx-auto space-y-8">
            <div class="text-center">
                <h1 class="text-3xl font-bold text-gray-900">"Exam Simulation"</h1>
                <p class="mt-2 text-gray-600">
                    "Mimic real test conditions with full-length practice exams."
                </p>
            </div>

            {move || {
                if let Some(title) = running.get() {
                    view! {
                        <div class="bg-white rounded-xl shadow p-8 text-center space-y-6">
                            <h2 class="text-2xl font-semibold text-gray-900">{title}</h2>
                            <div class="flex items-center justify-center space-x-2 text-indigo-600">
                                <span class="text-2xl">"⏱"</span>
                                <span class="text-3xl font-mono font-bold">
                                    {move || format!("Time Left: {}", session.with(ExamSession::clock))}
                                </span>
                            </div>
                            <button
                                on:click=end_exam
                                class="px-6 py-3 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-colors"
                            >
                                "End Exam"
                            </button>
                        </div>
                    }.into_view()
                } else {
                    let exams = session.with_untracked(|s| s.exams().to_vec());
                    view! {
                        <div class="bg-white rounded-xl shadow p-6">
                            <h2 class="text-xl font-semibold text-gray-900 mb-4">"Available Exams"</h2>
                            {if exams.is_empty() {
                                view! {
                                    <p class="text-gray-500">"No exams available at the moment."</p>
                                }.into_view()
                            } else {
                                view! {
                                    <ul class="divide-y divide-gray-100">
                                        {exams.into_iter().map(|exam| {
                                            let title = exam.title.clone();
                                            let duration = exam.duration;
                                            view! {
                                                <li class="py-4 flex items-center justify-between">
                                                    <div>
                                                        <h3 class="font-medium text-gray-900">{title}</h3>
                                                        <p class="text-sm text-gray-500">
                                                            {format!("Duration: {} minutes", duration)}
                                                        </p>
                                                    </div>
                                                    <button
                                                        on:click=move |_| start_exam(exam.clone())
                                                        class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
                                                    >
                                                        "Start Exam"
                                                    </button>
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                }.into_view()
                            }}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_title_follows_session() {
        let exams = mock::exams();
        let first = exams[0].clone();
        let mut session = ExamSession::new(exams);
        assert_eq!(running_title(&session), None);

        session.start(first.clone());
        assert_eq!(running_title(&session), Some(first.title));

        session.end();
        assert_eq!(running_title(&session), None);
    }
}
