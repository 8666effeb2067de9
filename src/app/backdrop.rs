use leptos::{html, prelude::*};

use crate::motion::{
    ornament::{field, BLOBS},
    Pointer,
};

/// Pointer spotlight plus the parallax layer the root view moves on scroll.
#[component]
pub fn InteractiveBackground(
    #[prop(into)] pointer: Signal<Pointer>,
    parallax_ref: NodeRef<html::Div>,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none z-0">
            <div
                class="absolute inset-0 opacity-30"
                style=move || format!("background: {};", pointer.get().spotlight())
            />
            <div node_ref=parallax_ref class="absolute inset-0 opacity-20 will-change-transform">
                {BLOBS
                    .iter()
                    .map(|blob| {
                        view! {
                            <div class=format!(
                                "absolute bg-gradient-to-r rounded-full blur-3xl {blob}",
                            ) />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn FloatingParticles() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none z-0">
            {field()
                .into_iter()
                .map(|particle| {
                    view! {
                        <div
                            class="absolute w-1 h-1 bg-blue-400 rounded-full opacity-20 animate-pulse will-change-transform"
                            style=particle.style()
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ScrollIndicator() -> impl IntoView {
    view! {
        <div class="fixed bottom-8 left-1/2 -translate-x-1/2 z-50 animate-bounce text-blue-400 text-2xl">
            "⌄"
        </div>
    }
}
