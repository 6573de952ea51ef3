use leptos::prelude::*;
use crate::app_state::use_site;

#[component]
pub fn Founder() -> impl IntoView {
    let founder = &use_site().founder;
    view! {
        <section id="founder" class="py-24 bg-white">
            <div class="grid items-center max-w-5xl gap-12 px-6 mx-auto md:grid-cols-3">
                <img
                    src=founder.image.as_str()
                    alt=founder.image_alt.as_str()
                    class="object-cover w-full shadow-lg aspect-square rounded-2xl"
                />
                <div class="md:col-span-2">
                    <h3 class="mb-4 text-3xl font-bold">{founder.heading.as_str()}</h3>
                    <p class="text-lg leading-relaxed text-gray-600">{founder.body.as_str()}</p>
                </div>
            </div>
        </section>
    }
}
