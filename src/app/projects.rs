use leptos::prelude::*;

use crate::{
    content::{Project, PROJECTS},
    motion::{
        reveal::{card_delay_ms, Entrance},
        Section,
    },
};

use super::section::{reveal, SectionHeading};

#[component]
pub fn ProjectsSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 relative z-10">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading text="Featured Projects" visible />
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index visible /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=reveal(
                "group bg-gray-800/50 backdrop-blur-sm rounded-2xl p-6 border border-gray-700 hover:border-purple-500/50 transition-all duration-500 hover:scale-105 hover:shadow-xl hover:shadow-purple-500/20",
                Entrance::Rise,
                visible,
            )
            style=format!("transition: all 0.5s ease {}ms;", card_delay_ms(index))
        >
            <div class="flex items-start justify-between mb-4">
                <h3 class="text-xl font-bold text-white group-hover:text-purple-400 transition-colors">
                    {project.title}
                </h3>
                <span class="text-gray-400 group-hover:text-purple-400 transition-colors">"↗"</span>
            </div>
            <p class="text-sm text-blue-400 mb-3 font-mono">{project.tech}</p>
            <p class="text-gray-300 mb-4">{project.description}</p>
            <div class="space-y-2">
                {project
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="flex items-center text-sm text-gray-400">
                                <div class="w-1.5 h-1.5 bg-purple-500 rounded-full mr-2" />
                                {*feature}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
