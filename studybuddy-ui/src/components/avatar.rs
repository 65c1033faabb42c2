//! Avatar Component
//!
//! Profile picture, or the first letter of the name when there is none.

use leptos::*;

use studybuddy::models::initial;

#[component]
pub fn Avatar(
    #[prop(into)]
    name: String,
    #[prop(default = None)]
    picture: Option<String>,
    /// Edge length in pixels
    #[prop(default = 40)]
    size: u32,
    /// Shown when the name is empty
    #[prop(default = "U")]
    fallback: &'static str,
) -> impl IntoView {
    let style = format!("width: {size}px; height: {size}px;");

    match picture {
        Some(src) => view! {
            <img src=src alt=name class="rounded-full object-cover" style=style />
        }
        .into_view(),
        None => {
            let letter = initial(&name);
            let letter = if letter.is_empty() { fallback.to_string() } else { letter };
            view! {
                <div
                    class="rounded-full bg-indigo-100 flex items-center justify-center"
                    style=style
                >
                    <span class="text-indigo-700 font-semibold">{letter}</span>
                </div>
            }
            .into_view()
        }
    }
}
