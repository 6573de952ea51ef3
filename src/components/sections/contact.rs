use leptos::prelude::*;
use crate::app_state::use_site;
use crate::icons::{facebook_icon, outline_icon};
use crate::models::site::{ContactCard, ContactKind};

fn contact_icon(kind: ContactKind) -> AnyView {
    match kind {
        ContactKind::Phone => outline_icon("call", "w-6 h-6 text-[var(--accent)]"),
        ContactKind::Email => outline_icon("mail", "w-6 h-6 text-[var(--accent)]"),
        ContactKind::Social => facebook_icon(),
    }
}

fn contact_card(card: &'static ContactCard) -> impl IntoView {
    // External profiles open in a new tab; tel: and mailto: stay in place.
    let external = card.kind == ContactKind::Social;
    view! {
        <div class="p-8 text-center transition-shadow bg-white shadow rounded-2xl hover:shadow-lg">
            <div class="flex items-center justify-center w-14 h-14 mx-auto mb-4 rounded-full bg-[var(--accent-soft)]">
                {contact_icon(card.kind)}
            </div>
            <h4 class="mb-2 text-lg font-bold text-gray-900">{card.title.as_str()}</h4>
            <p class="mb-4 text-sm text-gray-500">{card.detail.as_str()}</p>
            <a
                href=card.href.as_str()
                target=external.then_some("_blank")
                rel=external.then_some("noreferrer")
                class="font-semibold text-[var(--accent)] hover:underline"
            >
                {card.label.as_str()}
            </a>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let contact = &use_site().contact;
    view! {
        <section id="contact" class="py-24 bg-gray-50">
            <div class="max-w-6xl px-6 mx-auto">
                <div class="mb-12 text-center">
                    <span class="text-sm font-bold tracking-wider uppercase text-[var(--accent)]">{contact.eyebrow.as_str()}</span>
                    <h3 class="mt-2 mb-4 text-3xl font-bold">{contact.heading.as_str()}</h3>
                    <p class="max-w-2xl mx-auto text-gray-600">{contact.intro.as_str()}</p>
                </div>
                <div class="grid gap-8 md:grid-cols-3">
                    {contact.cards.iter().map(contact_card).collect_view()}
                </div>
            </div>
        </section>
    }
}
