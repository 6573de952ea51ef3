use leptos::prelude::*;
use crate::app_state::use_site;
use crate::components::carousel::{Carousel, CarouselTreatment};
use crate::icons::outline_icon;
use super::text_runs;

#[component]
pub fn Culture() -> impl IntoView {
    let site = use_site();
    let culture = &site.culture;
    let caption = (!culture.caption.is_empty()).then(|| culture.caption.clone());

    view! {
        <section id="culture" class="py-24 overflow-hidden bg-[var(--accent-soft)]">
            <div class="grid items-center max-w-6xl gap-16 px-6 mx-auto md:grid-cols-2">
                <div class="order-2 md:order-1">
                    <div class="relative">
                        <div class="absolute w-24 h-24 rounded-full -top-4 -left-4 bg-[var(--accent-muted)] opacity-30 blur-2xl"></div>
                        <Carousel
                            images=culture.images.clone()
                            interval_ms=site.timing.culture_interval_ms
                            treatment=CarouselTreatment::Heritage
                            alt=culture.image_alt.as_str()
                            caption=caption
                        />
                    </div>
                </div>

                <div class="order-1 md:order-2">
                    <span class="text-sm font-bold tracking-wider uppercase text-[var(--accent)]">{culture.eyebrow.as_str()}</span>
                    <h3 class="mt-2 mb-6 text-4xl font-bold text-gray-900">
                        {culture.heading_lead.as_str()} " "
                        <span class="text-[var(--accent)]">{culture.heading_accent.as_str()}</span>
                    </h3>
                    <p class="pl-4 mb-6 text-lg italic text-gray-700 border-l-4 border-[var(--accent)]">
                        {culture.quote.as_str()}
                    </p>
                    <p class="mb-6 leading-relaxed text-gray-600">
                        {text_runs(&culture.body, "text-[var(--accent-dark)]")}
                    </p>
                    <div class="flex flex-wrap gap-4 mb-8">
                        {culture.tags.iter().map(|tag| view! {
                            <span class="px-4 py-2 text-sm font-medium bg-white border rounded-full shadow-sm border-[var(--accent-muted)] text-[var(--accent-dark)]">
                                {tag.as_str()}
                            </span>
                        }).collect_view()}
                    </div>
                    <a href=culture.link.href.as_str() class="inline-flex items-center font-semibold transition-colors text-[var(--accent)] hover:text-[var(--accent-dark)]">
                        {culture.link.label.as_str()}
                        {outline_icon("arrow_right", "w-4 h-4 ml-2")}
                    </a>
                </div>
            </div>
        </section>
    }
}
