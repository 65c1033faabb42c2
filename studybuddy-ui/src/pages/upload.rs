//! Upload Page
//!
//! Stage study material by drag-and-drop or the file picker, play back the
//! simulated upload and then show the generated document summary.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::*;

use studybuddy::mock;
use studybuddy::models::DocumentSummary;
use studybuddy::upload::{
    FileCandidate, SectionToggles, StagedFile, UploadQueue, ACCEPTED_EXTENSIONS, PROGRESS_STEP_MS,
    SUMMARY_DELAY_MS,
};

use crate::state::use_global_state;

/// Turn a browser file list into upload candidates
fn candidates(files: Option<web_sys::FileList>) -> Vec<FileCandidate> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| FileCandidate::new(file.name(), file.type_(), file.size() as u64))
        .collect()
}

#[component]
pub fn Upload() -> impl IntoView {
    let state = use_global_state();
    let queue = create_rw_signal(UploadQueue::new());
    let summary = create_rw_signal(None::<DocumentSummary>);
    let (dragging, set_dragging) = create_signal(false);

    let stage = move |files: Vec<FileCandidate>| {
        let mut rejected = Vec::new();
        queue.update(|q| rejected = q.stage(files));
        for e in rejected {
            state.show_error(&e.to_string());
        }
    };

    let on_pick = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        stage(candidates(input.files()));
        // Allow picking the same file again
        input.set_value("");
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        stage(candidates(ev.data_transfer().and_then(|dt| dt.files())));
    };

    let start_upload = move |_| {
        let mut plan = None;
        queue.update(|q| plan = Some(q.begin_upload()));
        let plan = match plan {
            Some(Ok(plan)) => plan,
            Some(Err(e)) => {
                state.show_error(&e.to_string());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            for step in plan {
                TimeoutFuture::new(PROGRESS_STEP_MS as u32).await;
                queue.update(|q| q.apply(step));
            }
            queue.update(UploadQueue::finish);
            state.show_success("Files uploaded successfully");

            TimeoutFuture::new(SUMMARY_DELAY_MS as u32).await;
            summary.set(Some(mock::document_summary()));
        });
    };

    let remove = move |id| {
        let mut result = Ok(false);
        queue.update(|q| result = q.remove(id));
        if let Err(e) = result {
            state.show_error(&e.to_string());
        }
    };

    view! {
        <div class="max-w-4xl mx-auto space-y-8">
            <div class="text-center">
                <h1 class="text-3xl font-bold text-gray-900">"Upload Study Materials"</h1>
                <p class="mt-2 text-gray-600">
                    "Upload your notes, textbooks, or lecture slides and let StudyBuddy AI analyze them."
                </p>
            </div>

            {move || match summary.get() {
                Some(doc) => view! { <SummaryView summary=doc /> }.into_view(),
                None => view! {
                    <div class="space-y-6">
                        <label
                            on:dragover=move |ev: ev::DragEvent| {
                                ev.prevent_default();
                                set_dragging.set(true);
                            }
                            on:dragleave=move |_| set_dragging.set(false)
                            on:drop=on_drop
                            class=move || format!(
                                "block border-2 border-dashed rounded-xl p-12 text-center cursor-pointer transition-colors {}",
                                if dragging.get() { "border-indigo-500 bg-indigo-50" } else { "border-gray-300 hover:border-indigo-400" }
                            )
                        >
                            <div class="text-5xl mb-4">"📤"</div>
                            <p class="text-lg font-medium text-gray-700">"Drag and drop files here"</p>
                            <p class="text-sm text-gray-500 mt-1">"or click to browse"</p>
                            <p class="text-xs text-gray-400 mt-4">
                                "Supported formats: PDF, DOC, DOCX, PPT, PPTX, TXT (max 20MB)"
                            </p>
                            <input
                                type="file"
                                multiple=true
                                accept=ACCEPTED_EXTENSIONS
                                on:change=on_pick
                                class="hidden"
                            />
                        </label>

                        <StagedList queue=queue on_remove=remove />

                        <Show when=move || !queue.with(UploadQueue::is_empty)>
                            <div class="flex justify-end">
                                <button
                                    on:click=start_upload
                                    disabled=move || queue.with(UploadQueue::is_uploading)
                                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium \
                                           disabled:bg-gray-300 disabled:cursor-not-allowed transition-colors"
                                >
                                    {move || {
                                        if queue.with(UploadQueue::is_uploading) {
                                            "Uploading..."
                                        } else if queue.with(UploadQueue::is_complete) {
                                            "Processing..."
                                        } else {
                                            "Upload Files"
                                        }
                                    }}
                                </button>
                            </div>
                        </Show>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn StagedList<F>(queue: RwSignal<UploadQueue>, on_remove: F) -> impl IntoView
where
    F: Fn(uuid::Uuid) + Copy + 'static,
{
    view! {
        <Show when=move || !queue.with(UploadQueue::is_empty)>
            <div class="bg-white rounded-xl shadow divide-y divide-gray-100">
                <For
                    each=move || queue.with(|q| q.files().to_vec())
                    key=|file: &StagedFile| (file.id, file.progress)
                    children=move |file: StagedFile| {
                        let id = file.id;
                        view! {
                            <div class="p-4 flex items-center space-x-4">
                                <span class="text-2xl">{file.kind().icon()}</span>
                                <div class="flex-grow">
                                    <div class="flex justify-between">
                                        <span class="font-medium text-gray-800">{file.name.clone()}</span>
                                        <span class="text-sm text-gray-500">{file.display_size()}</span>
                                    </div>
                                    {(file.progress > 0).then(|| view! {
                                        <div class="w-full bg-gray-200 rounded-full h-2 mt-2">
                                            <div
                                                class="bg-indigo-600 h-2 rounded-full transition-all"
                                                style=format!("width: {}%", file.progress)
                                            />
                                        </div>
                                    })}
                                </div>
                                {if file.uploaded {
                                    view! { <span class="text-green-600 font-bold">"✓"</span> }.into_view()
                                } else {
                                    view! {
                                        <button
                                            on:click=move |_| on_remove(id)
                                            class="text-gray-400 hover:text-red-600"
                                            title="Remove"
                                        >
                                            "✕"
                                        </button>
                                    }.into_view()
                                }}
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn SummaryView(summary: DocumentSummary) -> impl IntoView {
    let navigate = use_navigate();
    let sections = create_rw_signal(SectionToggles::new());

    let section = move |key: String, title: String, body: View| {
        let toggle_key = key.clone();
        view! {
            <div class="border border-gray-200 rounded-lg">
                <button
                    on:click=move |_| sections.update(|s| s.toggle(&toggle_key))
                    class="w-full px-4 py-3 flex justify-between items-center font-medium text-gray-800 hover:bg-gray-50"
                >
                    <span>{title}</span>
                    <span>{
                        let key = key.clone();
                        move || if sections.with(|s| s.is_expanded(&key)) { "▲" } else { "▼" }
                    }</span>
                </button>
                <Show when=move || sections.with(|s| s.is_expanded(&key))>
                    <div class="px-4 pb-4">{body.clone()}</div>
                </Show>
            </div>
        }
    };

    let topics = summary
        .main_topics
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let body = view! {
                <div class="grid md:grid-cols-2 gap-4 text-sm">
                    <div>
                        <h4 class="font-semibold text-gray-700 mb-1">"Subtopics"</h4>
                        <ul class="list-disc list-inside text-gray-600">
                            {topic.subtopics.iter().map(|s| view! { <li>{s.clone()}</li> }).collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold text-gray-700 mb-1">"Key Points"</h4>
                        <ul class="list-disc list-inside text-gray-600">
                            {topic.key_points.iter().map(|p| view! { <li>{p.clone()}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
            }
            .into_view();
            section(SectionToggles::topic_key(i), topic.title.clone(), body)
        })
        .collect_view();

    let key_terms = view! {
        <dl class="space-y-3 text-sm">
            {summary.key_terms.iter().map(|t| view! {
                <div>
                    <dt class="font-semibold text-gray-800">{t.term.clone()}</dt>
                    <dd class="text-gray-600">{t.definition.clone()}</dd>
                </div>
            }).collect_view()}
        </dl>
    }
    .into_view();

    view! {
        <div class="bg-white rounded-xl shadow p-8 space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-gray-900">{summary.title.clone()}</h2>
                <p class="text-sm text-gray-500 mt-1">
                    {format!(
                        "{} pages • {} words • Last modified {}",
                        summary.page_count, summary.word_count, summary.last_modified
                    )}
                </p>
            </div>

            <div>
                <h3 class="text-lg font-semibold text-gray-900 mb-2">"Summary"</h3>
                <p class="text-gray-700">{summary.summary.clone()}</p>
            </div>

            <div class="space-y-3">
                <h3 class="text-lg font-semibold text-gray-900">"Main Topics"</h3>
                {topics}
            </div>

            {section("keyTerms".to_string(), "Key Terms".to_string(), key_terms)}

            <div class="flex justify-end gap-4">
                <button
                    on:click=move |_| navigate("/practiceQuestion", Default::default())
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium"
                >
                    "Generate Practice Questions"
                </button>
            </div>
        </div>
    }
}
