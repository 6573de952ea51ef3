use leptos::prelude::*;
use web_sys::EventTarget;
use crate::app_state::use_app_state;
use crate::icons::outline_icon;
use crate::lifecycle::{self, LeaseSet};
use crate::state::MenuState;

fn header_classes(opaque: bool) -> &'static str {
    if opaque {
        "fixed top-0 left-0 z-50 w-full transition-all duration-300 bg-white/95 backdrop-blur-md shadow-sm"
    } else {
        "fixed top-0 left-0 z-50 w-full transition-all duration-300 bg-transparent"
    }
}

fn ink_classes(opaque: bool) -> &'static str {
    if opaque { "text-gray-900" } else { "text-white" }
}

fn link_classes(opaque: bool) -> &'static str {
    if opaque {
        "relative text-gray-600 transition-colors hover:text-[var(--accent)] group"
    } else {
        "relative text-white/90 transition-colors hover:text-white group"
    }
}

/// Sticky header: transparent over the hero, opaque once the page scrolls.
#[component]
pub fn MainTopNav() -> impl IntoView {
    let state = use_app_state();
    let site = state.site;

    let leases = LeaseSet::scoped();
    if let Some(window) = web_sys::window() {
        let win = window.clone();
        let sync = move || {
            let y = win.scroll_y().unwrap_or(0.0);
            state.scroll.try_maybe_update(|flag| (flag.update(y), ()));
        };
        sync();
        let target: &EventTarget = window.as_ref();
        leases.update_value(|set| set.hold(lifecycle::listen(target, "scroll", move |_| sync())));
    }

    let opaque = Memo::new(move |_| state.scroll.get().is_scrolled() || state.menu.get().is_open());
    let close_menu = move |_: leptos::ev::MouseEvent| state.menu.update(MenuState::close);

    let desktop_links = site.nav.links.iter().map(|link| view! {
        <a href=link.href.as_str() class=move || link_classes(opaque.get()) on:click=close_menu>
            {link.label.as_str()}
            <span class="absolute left-0 w-0 h-0.5 transition-all -bottom-1 bg-[var(--accent)] group-hover:w-full"></span>
        </a>
    }).collect_view();

    view! {
        <header class=move || header_classes(opaque.get())>
            <div class="flex items-center justify-between px-6 py-3 mx-auto max-w-7xl">
                <a href="#" class="flex items-center gap-3 group" on:click=close_menu>
                    <div class="w-12 h-12 overflow-hidden border border-gray-100 rounded-lg shadow-sm md:h-14 md:w-14 shrink-0">
                        <img src=site.brand.logo.as_str() alt=site.brand.logo_alt.as_str() class="object-cover w-full h-full" />
                    </div>
                    <div class="flex flex-col">
                        <h1 class=move || format!("text-lg font-bold leading-tight md:text-xl transition-colors {}", ink_classes(opaque.get()))>
                            {site.brand.name.as_str()}
                        </h1>
                        <span class="text-xs font-bold tracking-widest uppercase text-[var(--accent-muted)]">
                            {site.brand.tagline.as_str()}
                        </span>
                    </div>
                </a>

                <nav class="items-center hidden gap-8 text-sm font-semibold md:flex">
                    {desktop_links}
                    <a href=site.nav.cta.href.as_str() class="px-6 py-2.5 text-white rounded-full shadow-md bg-[var(--accent)] hover:bg-[var(--accent-dark)] hover:shadow-lg transition-all transform hover:-translate-y-0.5" on:click=close_menu>
                        {site.nav.cta.label.as_str()}
                    </a>
                </nav>

                {/* Mobile Menu Button */}
                <button
                    type="button"
                    class=move || format!("p-2 rounded-md md:hidden {}", ink_classes(opaque.get()))
                    aria-label="Toggle navigation"
                    aria-expanded=move || state.menu.get().is_open().to_string()
                    on:click=move |_| state.menu.update(MenuState::toggle)
                >
                    {outline_icon("menu", "w-6 h-6")}
                </button>
            </div>

            {move || state.menu.get().is_open().then(|| view! {
                <nav class="px-6 pb-4 bg-white shadow-md md:hidden">
                    {site.nav.links.iter().map(|link| view! {
                        <a href=link.href.as_str() class="block px-2 py-3 text-gray-700 border-b border-gray-100 hover:text-[var(--accent)]" on:click=close_menu>
                            {link.label.as_str()}
                        </a>
                    }).collect_view()}
                    <a href=site.nav.cta.href.as_str() class="block px-6 py-3 mt-4 font-semibold text-center text-white rounded-full bg-[var(--accent)]" on:click=close_menu>
                        {site.nav.cta.label.as_str()}
                    </a>
                </nav>
            })}
        </header>
    }
}
