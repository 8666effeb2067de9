use leptos::prelude::*;

use crate::{content::PROFILE, motion::Section};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full bg-gray-900/80 backdrop-blur-md border-b border-gray-800 z-50">
            <div class="max-w-6xl mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <a
                        href=Section::Hero.anchor()
                        title=Section::Hero.label()
                        class="text-xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent"
                    >
                        {PROFILE.name}
                    </a>
                    <div class="hidden md:flex space-x-8">
                        {Section::NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.anchor()
                                        class="text-gray-300 hover:text-blue-400 transition-colors duration-300 relative group"
                                    >
                                        {section.label()}
                                        <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-blue-400 transition-all duration-300 group-hover:w-full" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
