use leptos::prelude::*;
use crate::app_state::{open_media, use_app_state};
use crate::icons::play_icon;

/// Video cards. Clicking a card opens it in the page's media modal.
#[component]
pub fn Videos() -> impl IntoView {
    let state = use_app_state();
    let videos = &state.site.videos;

    let cards = videos.items.iter().map(|item| {
        let selected = item.clone();
        view! {
            <button
                type="button"
                class="relative overflow-hidden text-left shadow-lg cursor-pointer group rounded-xl"
                aria-label=format!("Play {}", item.title)
                on:click=move |_| open_media(&state, selected.clone())
            >
                <div class="relative h-64 overflow-hidden">
                    <img
                        src=item.thumbnail.as_str()
                        alt=item.title.as_str()
                        class="object-cover w-full h-full transition-transform duration-700 transform group-hover:scale-110"
                    />
                    <div class="absolute inset-0 transition-colors bg-black/30 group-hover:bg-black/10"></div>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <div class="flex items-center justify-center w-16 h-16 transition-transform duration-300 rounded-full shadow-xl bg-white/90 group-hover:scale-110">
                            {play_icon()}
                        </div>
                    </div>
                    <span class="absolute px-2 py-1 text-xs font-bold text-white rounded bottom-3 right-3 bg-black/70">
                        {item.duration_label.as_str()}
                    </span>
                </div>
                <div class="p-4 bg-white">
                    <h4 class="text-lg font-bold text-gray-800 transition-colors group-hover:text-[var(--accent)]">
                        {item.title.as_str()}
                    </h4>
                    <p class="mt-1 text-sm text-gray-500">{videos.call_to_action.as_str()}</p>
                </div>
            </button>
        }
    }).collect_view();

    view! {
        <section id="videos" class="py-20 text-white bg-gray-900">
            <div class="max-w-6xl px-6 mx-auto">
                <div class="mb-12 text-center">
                    <span class="text-sm font-bold tracking-widest uppercase text-[var(--accent-muted)]">{videos.eyebrow.as_str()}</span>
                    <h3 class="mt-2 text-3xl font-bold md:text-4xl">{videos.heading.as_str()}</h3>
                    <p class="max-w-2xl mx-auto mt-4 text-gray-400">{videos.intro.as_str()}</p>
                </div>
                <div class="grid gap-8 md:grid-cols-3">
                    {cards}
                </div>
            </div>
        </section>
    }
}
