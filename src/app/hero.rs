use leptos::prelude::*;

use crate::{
    content::{HERO_CHIPS, PROFILE},
    motion::{reveal::Entrance, Pointer, Section},
};

use super::{backdrop::ScrollIndicator, emblem::Emblem, section::reveal};

#[component]
pub fn HeroSection(
    #[prop(into)] pointer: Signal<Pointer>,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <section
            id=Section::Hero.id()
            class="min-h-screen flex items-center justify-center relative z-10"
        >
            <div class=reveal(
                "text-center max-w-4xl mx-auto px-6 transition-all duration-1000",
                Entrance::Rise,
                visible,
            )>
                <Emblem pointer />
                <h1 class="text-6xl md:text-8xl font-bold mb-6 bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500 bg-clip-text text-transparent animate-pulse">
                    {PROFILE.name}
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 mb-8 animate-fade-in">
                    {PROFILE.headline}
                </p>
                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    {HERO_CHIPS
                        .iter()
                        .enumerate()
                        .map(|(index, tech)| {
                            view! {
                                <span
                                    class="px-4 py-2 bg-gray-800/50 backdrop-blur-sm rounded-full border border-blue-500/30 text-blue-400 hover:bg-blue-500/20 transition-all duration-300 hover:scale-110"
                                    style=format!("animation-delay: {:.1}s;", index as f64 * 0.1)
                                >
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap justify-center gap-4">
                    <a
                        href=PROFILE.mailto()
                        class="group flex items-center space-x-2 bg-blue-600 hover:bg-blue-500 px-6 py-3 rounded-full transition-all duration-300 hover:scale-105 hover:shadow-lg hover:shadow-blue-500/30"
                    >
                        <span class="group-hover:animate-bounce">"📧"</span>
                        <span>"Get In Touch"</span>
                    </a>
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="group flex items-center space-x-2 bg-gray-800 hover:bg-gray-700 border border-gray-600 px-6 py-3 rounded-full transition-all duration-300 hover:scale-105"
                    >
                        <span class="group-hover:animate-bounce">"🐙"</span>
                        <span>"GitHub"</span>
                    </a>
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="group flex items-center space-x-2 bg-gray-800 hover:bg-gray-700 border border-gray-600 px-6 py-3 rounded-full transition-all duration-300 hover:scale-105"
                    >
                        <span class="group-hover:animate-bounce">"💼"</span>
                        <span>"LinkedIn"</span>
                    </a>
                </div>
            </div>
            <ScrollIndicator />
        </section>
    }
}
