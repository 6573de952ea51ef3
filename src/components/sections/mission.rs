use leptos::prelude::*;
use crate::app_state::use_site;
use crate::icons::{dot_pattern, outline_icon};
use super::text_runs;

#[component]
pub fn Mission() -> impl IntoView {
    let mission = &use_site().mission;
    view! {
        <section id="mission" class="relative py-20 overflow-hidden text-white bg-[var(--accent-dark)]">
            <div class="absolute top-0 left-0 w-full h-full pointer-events-none opacity-10">
                {dot_pattern()}
            </div>

            <div class="relative z-10 max-w-4xl px-6 mx-auto text-center">
                <div class="inline-block p-3 mb-6 rounded-full bg-[var(--accent)]">
                    {outline_icon("bolt", "w-8 h-8 text-[var(--accent-muted)]")}
                </div>
                <h3 class="text-sm font-bold tracking-[0.2em] text-[var(--accent-muted)] uppercase mb-6">
                    {mission.eyebrow.as_str()}
                </h3>
                <p class="font-serif text-2xl font-light leading-relaxed md:text-3xl">
                    {text_runs(&mission.statement, "font-semibold text-white")}
                </p>
            </div>
        </section>
    }
}
