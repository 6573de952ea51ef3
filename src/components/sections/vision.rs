use leptos::prelude::*;
use crate::app_state::use_site;
use crate::icons::outline_icon;

#[component]
pub fn Vision() -> impl IntoView {
    let vision = &use_site().vision;
    let cards = vision.cards.iter().map(|card| view! {
        <div class="p-6 transition-shadow duration-300 bg-white shadow rounded-2xl hover:shadow-lg">
            <div class=format!("flex items-center justify-center w-12 h-12 mb-4 rounded-lg {}", card.tone.badge_classes())>
                {outline_icon(&card.icon, "w-6 h-6")}
            </div>
            <h4 class="mb-3 text-lg font-semibold text-gray-800">{card.title.as_str()}</h4>
            <p class="text-sm text-gray-600">{card.body.as_str()}</p>
        </div>
    }).collect_view();

    view! {
        <section id="vision" class="py-24 bg-gray-50">
            <div class="max-w-6xl px-6 mx-auto">
                <h3 class="mb-4 text-3xl font-bold text-center">{vision.heading.as_str()}</h3>
                <p class="max-w-3xl mx-auto mb-12 text-center text-gray-600">{vision.intro.as_str()}</p>
                <div class="grid gap-8 md:grid-cols-3">
                    {cards}
                </div>
            </div>
        </section>
    }
}
