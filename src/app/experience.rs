use leptos::prelude::*;

use crate::{
    content::{Experience, EXPERIENCE},
    motion::{
        reveal::{card_delay_ms, Entrance},
        Section,
    },
};

use super::section::{reveal, SectionHeading};

#[component]
pub fn ExperienceSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-20 relative z-10">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading text="Professional Experience" visible />
                <div class="relative">
                    <div class="absolute left-8 top-0 bottom-0 w-0.5 bg-gradient-to-b from-blue-500 to-purple-500" />
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <TimelineEntry entry index visible /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(
    entry: &'static Experience,
    index: usize,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=reveal("relative flex items-start mb-12", Entrance::FromLeft, visible)
            style=format!("transition: all 0.6s ease {}ms;", card_delay_ms(index))
        >
            <div class="absolute left-6 w-4 h-4 bg-blue-500 rounded-full border-4 border-gray-900 animate-pulse" />
            <div class="ml-20 bg-gray-800/50 backdrop-blur-sm rounded-2xl p-6 border border-gray-700 hover:border-blue-500/50 transition-all duration-300 hover:transform hover:scale-105 w-full">
                <div class="flex flex-wrap items-center justify-between mb-4">
                    <div>
                        <h3 class="text-xl font-bold text-white">{entry.role}</h3>
                        <p class="text-blue-400 font-semibold">{entry.company}</p>
                    </div>
                    <span class="text-gray-400 bg-gray-700/50 px-3 py-1 rounded-full text-sm">
                        {entry.period}
                    </span>
                </div>
                <p class="text-gray-300">{entry.description}</p>
            </div>
        </div>
    }
}
