use leptos::{html, prelude::*};
use leptos_use::use_element_hover;

use crate::motion::{
    ornament::{glow_classes, orbit, orbit_animation, FACES},
    tilt::{Bounds, Tilt},
    Pointer,
};

/// Six-faced emblem that turns toward the pointer and lifts while hovered.
#[component]
pub fn Emblem(#[prop(into)] pointer: Signal<Pointer>) -> impl IntoView {
    let emblem_ref = NodeRef::<html::Div>::new();
    let hovered = use_element_hover(emblem_ref);

    Effect::new(move |_| {
        let pointer = pointer.get();
        let hovered = hovered.get();
        let Some(el) = emblem_ref.get() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let bounds = Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        let transform = Tilt::toward(pointer, bounds).transform(hovered);
        if let Err(e) = web_sys::HtmlElement::style(&el).set_property("transform", &transform) {
            log::warn!("couldn't turn emblem: {e:?}");
        }
    });

    view! {
        <div class="relative mb-8">
            <div
                node_ref=emblem_ref
                class="w-32 h-32 mx-auto cursor-pointer transition-all duration-300 ease-out"
                style="transform-style: preserve-3d"
            >
                <div class="relative w-full h-full" style="transform-style: preserve-3d">
                    {FACES
                        .iter()
                        .map(|face| {
                            view! {
                                <div
                                    class=format!(
                                        "absolute inset-0 bg-gradient-to-br rounded-xl border flex items-center justify-center {}",
                                        face.classes,
                                    )
                                    style=format!(
                                        "transform: {}; box-shadow: {};",
                                        face.transform,
                                        face.glow,
                                    )
                                >
                                    <div class=format!(
                                        "{} font-bold text-white",
                                        face.glyph_class,
                                    )>{face.glyph}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="absolute inset-0 pointer-events-none">
                    {orbit()
                        .into_iter()
                        .map(|particle| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "absolute w-2 h-2 bg-blue-400 rounded-full opacity-60 -translate-x-1/2 -translate-y-1/2 {}",
                                            orbit_animation(hovered.get()),
                                        )
                                    }
                                    style=particle.style()
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div
                class=move || {
                    format!(
                        "absolute inset-0 w-32 h-32 mx-auto rounded-full transition-all duration-300 -z-10 {}",
                        glow_classes(hovered.get()),
                    )
                }
                style="background: radial-gradient(circle, rgba(59, 130, 246, 0.3) 0%, transparent 70%); filter: blur(20px);"
            />
        </div>
    }
}
