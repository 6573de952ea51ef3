use leptos::prelude::*;
use crate::app_state::use_site;
use crate::icons::outline_icon;

#[component]
pub fn Tribute() -> impl IntoView {
    let tribute = &use_site().tribute;
    let status = &tribute.status;
    let bar_style = format!("width: {}%;", status.percent.min(100));

    view! {
        <section id="tribute" class="relative py-24 overflow-hidden text-white bg-gray-900">
            <img
                src=tribute.background.as_str()
                alt=tribute.background_alt.as_str()
                class="absolute inset-0 object-cover w-full h-full opacity-20"
            />
            <div class="relative z-10 grid max-w-6xl gap-12 px-6 mx-auto md:grid-cols-2">
                <div>
                    <span class="text-sm font-bold tracking-widest uppercase text-[var(--accent-muted)]">{tribute.eyebrow.as_str()}</span>
                    <h3 class="mt-2 mb-6 text-4xl font-bold">
                        {tribute.heading_lead.as_str()} " "
                        <span class="text-[var(--accent-muted)]">{tribute.heading_accent.as_str()}</span>
                    </h3>
                    {tribute.paragraphs.iter().map(|p| view! { <p class="mb-4 text-gray-300">{p.as_str()}</p> }).collect_view()}
                    <blockquote class="pl-4 mt-6 italic text-gray-200 border-l-4 border-[var(--accent)]">
                        {tribute.scripture.text.as_str()}
                        <cite class="block mt-2 text-sm not-italic font-semibold text-[var(--accent-muted)]">
                            {tribute.scripture.reference.as_str()}
                        </cite>
                    </blockquote>
                </div>

                <div class="p-8 border bg-white/10 backdrop-blur-md rounded-2xl border-white/20">
                    <div class="flex items-center justify-between mb-6">
                        <h4 class="text-xl font-bold">{tribute.achievements_title.as_str()}</h4>
                        <span class="px-3 py-1 text-xs font-bold rounded-full bg-[var(--accent)]">{tribute.badge.as_str()}</span>
                    </div>
                    <ul class="space-y-4">
                        {tribute.achievements.iter().map(|a| view! {
                            <li class="flex items-start gap-3">
                                <span class="p-1 mt-1 rounded-full bg-[var(--accent)]">
                                    {outline_icon("check", "w-4 h-4 text-white")}
                                </span>
                                <div>
                                    <p class="font-semibold">{a.title.as_str()}</p>
                                    <p class="text-sm text-gray-300">{a.detail.as_str()}</p>
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>
                    <div class="mt-8">
                        <div class="flex justify-between mb-2 text-sm">
                            <span>{status.label.as_str()}</span>
                            <span class="font-bold text-[var(--accent-muted)]">{status.value.as_str()}</span>
                        </div>
                        <div
                            class="w-full h-3 overflow-hidden rounded-full bg-white/20"
                            role="progressbar"
                            aria-valuemin="0"
                            aria-valuemax="100"
                            aria-valuenow=status.percent.min(100).to_string()
                        >
                            <div class="h-full rounded-full bg-[var(--accent)]" style=bar_style></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
