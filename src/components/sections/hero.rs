use leptos::prelude::*;
use crate::app_state::use_site;

#[component]
pub fn Hero() -> impl IntoView {
    let hero = &use_site().hero;
    view! {
        <section
            class="flex items-center justify-center h-screen text-white bg-center bg-cover"
            style=format!("background-image: url({});", hero.background)
        >
            <div class="max-w-2xl p-10 mx-4 text-center bg-black/50 rounded-xl">
                <h2 class="mb-4 text-4xl font-bold md:text-5xl">{hero.title.as_str()}</h2>
                <p class="mb-6 text-lg">{hero.subtitle.as_str()}</p>
                <a href=hero.cta.href.as_str() class="inline-block px-8 py-3 font-semibold rounded-full bg-[var(--accent)] hover:bg-[var(--accent-dark)]">
                    {hero.cta.label.as_str()}
                </a>
            </div>
        </section>
    }
}
