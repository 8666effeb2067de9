use leptos::{html, prelude::*};
use leptos_meta::Title;

use crate::motion::{
    browser::{self, BrowserScheduler, Listeners},
    parallax_transform, MotionSinks, PageMotion, Pointer, Section, VisibilityFlags,
};

use super::{
    about::AboutSection,
    backdrop::{FloatingParticles, InteractiveBackground},
    contact::{ContactSection, Footer},
    experience::ExperienceSection,
    hero::HeroSection,
    nav::NavBar,
    projects::ProjectsSection,
    skills::SkillsSection,
};

/// Root view. Owns pointer, visibility and parallax state and the window
/// listeners feeding them.
#[component]
pub fn Portfolio() -> impl IntoView {
    let pointer = RwSignal::new(Pointer::default());
    let flags = RwSignal::new(VisibilityFlags::default());
    let parallax_ref = NodeRef::<html::Div>::new();
    let listeners = StoredValue::new_local(None::<Listeners>);

    // listeners only exist in the browser, once per mount
    Effect::watch(
        || (),
        move |_, _, _| {
            let sinks = MotionSinks {
                pointer: Box::new(move |p| pointer.set(p)),
                parallax: Box::new(move |offset| {
                    let Some(layer) = parallax_ref.get_untracked() else {
                        return;
                    };
                    if let Err(e) = web_sys::HtmlElement::style(&layer)
                        .set_property("transform", &parallax_transform(offset))
                    {
                        log::warn!("couldn't move parallax layer: {e:?}");
                    }
                }),
                visibility: Box::new(move |change| {
                    flags.maybe_update(|f| f.apply(change));
                }),
            };
            let motion = PageMotion::new(BrowserScheduler, browser::scroll_offset, sinks);
            listeners.set_value(Some(browser::install(motion)));
        },
        true,
    );

    on_cleanup(move || {
        if let Some(Some(listeners)) = listeners.try_update_value(Option::take) {
            listeners.remove();
        }
    });

    let visible =
        move |section: Section| Signal::from(Memo::new(move |_| flags.with(|f| f.is_visible(section))));

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gray-900 text-white overflow-x-hidden">
            <InteractiveBackground pointer parallax_ref />
            <FloatingParticles />
            <NavBar />
            <HeroSection pointer visible=visible(Section::Hero) />
            <AboutSection visible=visible(Section::About) />
            <ExperienceSection visible=visible(Section::Experience) />
            <ProjectsSection visible=visible(Section::Projects) />
            <SkillsSection visible=visible(Section::Skills) />
            <ContactSection visible=visible(Section::Contact) />
            <Footer />
        </div>
    }
}
