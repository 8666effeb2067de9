use leptos::prelude::*;

use crate::{
    content::{Skill, SkillArea, SKILLS, SKILL_AREAS},
    motion::{
        reveal::{fill_width, skill_delay_ms, Entrance},
        Section,
    },
};

use super::section::{reveal, SectionHeading};

#[component]
pub fn SkillsSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 relative z-10">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading text="Technical Skills" visible />
                <div class="grid md:grid-cols-2 gap-8">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillBar skill index visible /> })
                        .collect_view()}
                </div>
                <div class="mt-16 grid md:grid-cols-3 gap-8">
                    {SKILL_AREAS
                        .iter()
                        .map(|area| view! { <SkillAreaCard area visible /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(
    skill: &'static Skill,
    index: usize,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    let level = skill.level;

    view! {
        <div
            class=reveal("bg-gray-800/50 backdrop-blur-sm rounded-xl p-6 border border-gray-700 hover:border-blue-500/50 transition-all duration-500", Entrance::SlideIn, visible)
            style=format!("transition-delay: {}ms;", skill_delay_ms(index))
        >
            <div class="flex items-center justify-between mb-3">
                <div class="flex items-center space-x-3">
                    <span class="text-blue-400">{skill.icon.glyph()}</span>
                    <span class="font-semibold text-white">{skill.name}</span>
                </div>
                <span class="text-gray-400">{format!("{level}%")}</span>
            </div>
            <div class="w-full bg-gray-700 rounded-full h-2">
                <div
                    class="bg-gradient-to-r from-blue-500 to-purple-500 h-2 rounded-full transition-all duration-2000 ease-out"
                    style:width=move || fill_width(level, visible.get())
                />
            </div>
        </div>
    }
}

#[component]
fn SkillAreaCard(area: &'static SkillArea, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class=reveal("text-center transform transition-all duration-1000", Entrance::Rise, visible)
            style=format!("transition-delay: {}ms;", area.delay_ms)
        >
            <div class="w-16 h-16 bg-gray-800 rounded-full flex items-center justify-center mx-auto mb-4 hover:scale-110 transition-transform">
                <span class=format!("text-2xl {}", area.accent)>{area.icon.glyph()}</span>
            </div>
            <h3 class="text-xl font-bold mb-2">{area.title}</h3>
            <p class="text-gray-400">{area.summary}</p>
        </div>
    }
}
