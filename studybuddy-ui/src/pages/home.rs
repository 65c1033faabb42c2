//! Landing Page

use leptos::*;

use crate::components::{CallToAction, Features, Hero, Testimonials};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div>
            <Hero />
            <Features />
            <Testimonials />
            <CallToAction />
        </div>
    }
}
