use leptos::prelude::*;

use crate::{
    content::{contact_cards, ContactCard, CLOSING_DELAY_MS, PROFILE},
    motion::{reveal::Entrance, Section},
};

use super::section::{reveal, SectionHeading};

#[component]
pub fn ContactSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 relative z-10">
            <div class="max-w-4xl mx-auto px-6 text-center">
                <SectionHeading text="Let's Connect" visible />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                    {contact_cards()
                        .into_iter()
                        .map(|card| view! { <ContactLink card visible /> })
                        .collect_view()}
                </div>
                <div
                    class=reveal("transform transition-all duration-1000", Entrance::Rise, visible)
                    style=format!("transition-delay: {CLOSING_DELAY_MS}ms;")
                >
                    <p class="text-xl text-gray-300 mb-8">{PROFILE.closing}</p>
                    <div class="inline-flex items-center space-x-2 text-blue-400">
                        <span class="w-2 h-2 bg-green-500 rounded-full animate-pulse" />
                        <span>{PROFILE.availability}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactLink(card: ContactCard, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let hover = card.hover;
    let external = card.href.starts_with("http");

    view! {
        <a
            href=card.href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class=move || {
                format!(
                    "group bg-gray-800/50 backdrop-blur-sm rounded-xl p-6 border border-gray-700 transition-all duration-300 hover:scale-105 hover:shadow-lg {hover} {}",
                    Entrance::Rise.classes(visible.get()),
                )
            }
            style=format!("transition-delay: {}ms;", card.delay_ms)
        >
            <div class=format!(
                "text-2xl mb-3 group-hover:animate-bounce {}",
                card.accent,
            )>{card.glyph}</div>
            <h3 class="font-semibold mb-2">{card.label}</h3>
            <p class="text-gray-400 text-sm break-all">{card.detail}</p>
        </a>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-gray-800 relative z-10">
            <div class="max-w-6xl mx-auto px-6 text-center text-gray-400">
                <p>
                    {format!(
                        "© {} {}. Built with Rust, Leptos and Tailwind CSS.",
                        env!("BUILD_YEAR"),
                        PROFILE.name,
                    )}
                </p>
            </div>
        </footer>
    }
}
