use leptos::prelude::*;

use crate::{
    content::{EDUCATION, PROFILE},
    motion::{reveal::Entrance, Section},
};

use super::section::{reveal, SectionHeading};

#[component]
pub fn AboutSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 relative z-10">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeading text="About Me" visible />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class=reveal(
                        "transform transition-all duration-1000 delay-300",
                        Entrance::FromLeft,
                        visible,
                    )>
                        {PROFILE
                            .bio
                            .iter()
                            .map(|paragraph| {
                                view! {
                                    <p class="text-lg text-gray-300 mb-6 leading-relaxed">
                                        {*paragraph}
                                    </p>
                                }
                            })
                            .collect_view()}
                        <div class="flex items-center space-x-4 text-gray-400">
                            <span class="flex items-center">
                                <span class="mr-2">"📍"</span>
                                {PROFILE.location}
                            </span>
                            <span class="flex items-center">
                                <span class="mr-2">"📞"</span>
                                {PROFILE.phone}
                            </span>
                        </div>
                    </div>
                    <div class=reveal(
                        "transform transition-all duration-1000 delay-500",
                        Entrance::FromRight,
                        visible,
                    )>
                        <div class="bg-gray-800/50 backdrop-blur-sm rounded-2xl p-8 border border-gray-700 hover:border-blue-500/50 transition-all duration-300">
                            <h3 class="text-2xl font-bold mb-6 text-blue-400">"Education"</h3>
                            <div class="space-y-4">
                                {EDUCATION
                                    .iter()
                                    .map(|entry| {
                                        view! {
                                            <div>
                                                <h4 class="font-semibold text-white">
                                                    {entry.degree}
                                                </h4>
                                                <p class="text-gray-400">
                                                    {format!("{} ({})", entry.institution, entry.period)}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
