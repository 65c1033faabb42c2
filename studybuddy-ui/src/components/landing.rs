//! Landing page sections

use leptos::*;
use leptos_router::*;

use studybuddy::mock;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-indigo-50 to-white">
            <div class="container mx-auto px-4 py-20">
                <div class="max-w-3xl">
                    <h1 class="text-5xl font-extrabold text-gray-900 leading-tight">
                        "Transform Your Learning Experience with AI"
                    </h1>
                    <p class="mt-6 text-xl text-gray-600">
                        "StudyBuddy AI turns your course materials into personalized learning \
                         experiences, interactive exercises, and exam prep tools - all powered \
                         by artificial intelligence."
                    </p>
                    <div class="mt-10 flex flex-wrap gap-4">
                        <A
                            href="/auth"
                            class="px-8 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
                        >
                            "Get Started Free"
                        </A>
                        <a
                            href="#features"
                            class="px-8 py-3 border border-indigo-600 text-indigo-600 hover:bg-indigo-50 rounded-lg font-medium transition-colors"
                        >
                            "See How It Works"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <div id="features" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-3xl font-bold text-gray-900">
                        "AI-Powered Features That Transform Your Study Experience"
                    </h2>
                    <p class="mt-4 text-lg text-gray-600">
                        "StudyBuddy AI combines advanced artificial intelligence with educational \
                         expertise to create a truly personalized learning platform."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {mock::features().into_iter().map(|feature| view! {
                        <div class="p-6 rounded-xl border border-gray-100 shadow-sm hover:shadow-md transition-shadow">
                            <div class="w-12 h-12 rounded-lg bg-indigo-100 flex items-center justify-center text-2xl mb-4">
                                {feature.icon}
                            </div>
                            <h3 class="text-xl font-semibold text-gray-900 mb-2">{feature.name}</h3>
                            <p class="text-gray-600">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <div class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-3xl font-bold text-gray-900">"What Our Users Are Saying"</h2>
                    <p class="mt-4 text-lg text-gray-600">
                        "Students across different disciplines are transforming how they learn with StudyBuddy AI."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {mock::testimonials().into_iter().map(|testimonial| view! {
                        <div class="bg-white p-6 rounded-xl shadow-sm">
                            <div class="flex items-center mb-4">
                                <img
                                    src=testimonial.avatar
                                    alt=testimonial.author
                                    class="w-12 h-12 rounded-full object-cover mr-4"
                                />
                                <div>
                                    <h4 class="font-semibold text-gray-900">{testimonial.author}</h4>
                                    <p class="text-sm text-gray-500">{testimonial.role}</p>
                                </div>
                            </div>
                            <p class="text-gray-600 italic">{format!("\"{}\"", testimonial.content)}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <div class="bg-indigo-700">
            <div class="container mx-auto px-4 py-16 text-center">
                <h2 class="text-3xl font-bold text-white">
                    "Ready to transform your learning experience?"
                </h2>
                <p class="mt-4 text-lg text-indigo-100 max-w-2xl mx-auto">
                    "Join thousands of students who are studying smarter, not harder, with \
                     StudyBuddy AI's personalized learning platform."
                </p>
                <div class="mt-8">
                    <A
                        href="/auth"
                        class="inline-block px-8 py-3 bg-white text-indigo-700 hover:bg-indigo-50 rounded-lg font-medium transition-colors"
                    >
                        "Start Your Free Trial"
                    </A>
                </div>
                <p class="mt-4 text-sm text-indigo-200">"No credit card required. Free for 14 days."</p>
            </div>
        </div>
    }
}
