use leptos::prelude::*;

use crate::motion::reveal::Entrance;

/// Class closure combining fixed classes with the entrance state.
pub fn reveal(
    base: &'static str,
    entrance: Entrance,
    visible: Signal<bool>,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || format!("{base} {}", entrance.classes(visible.get()))
}

#[component]
pub fn SectionHeading(text: &'static str, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <h2 class=reveal(
            "text-4xl font-bold text-center mb-16 bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent transform transition-all duration-1000",
            Entrance::Rise,
            visible,
        )>{text}</h2>
    }
}
