use leptos::prelude::*;
use crate::app_state::use_site;

#[component]
pub fn Visit() -> impl IntoView {
    let visit = &use_site().visit;
    let map_ref = NodeRef::<leptos::html::Iframe>::new();
    // `loading` must be set before `src` for the embed to be deferred.
    map_ref.on_load(move |frame| {
        if let Err(e) = frame.set_attribute("loading", "lazy") {
            log::warn!("Could not defer map embed: {e:?}");
        }
        frame.set_src(&visit.map.embed_url);
    });
    let note = (!visit.note.is_empty()).then(|| view! {
        <p class="mt-4 text-sm italic text-gray-500">{visit.note.as_str()}</p>
    });

    view! {
        <section id="visit" class="py-24 bg-white">
            <div class="grid items-center max-w-6xl gap-12 px-6 mx-auto md:grid-cols-2">
                <div>
                    <h3 class="mb-6 text-3xl font-bold">{visit.heading.as_str()}</h3>
                    {visit.paragraphs.iter().map(|p| view! { <p class="mb-4 text-gray-600">{p.as_str()}</p> }).collect_view()}
                    <ul class="mt-6 space-y-2 text-gray-700 list-disc list-inside">
                        {visit.highlights.iter().map(|h| view! { <li>{h.as_str()}</li> }).collect_view()}
                    </ul>
                    {note}
                </div>
                <div class="w-full overflow-hidden shadow-lg h-[400px] rounded-2xl">
                    <iframe
                        node_ref=map_ref
                        title=visit.map.title.as_str()
                        class="w-full h-full border-0"
                        referrerpolicy="no-referrer-when-downgrade"
                        allowfullscreen=true
                    ></iframe>
                </div>
            </div>
        </section>
    }
}
