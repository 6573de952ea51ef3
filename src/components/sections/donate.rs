use leptos::prelude::*;
use crate::app_state::use_site;
use crate::icons::outline_icon;

/// Payment instructions. Display only; nothing here is submitted.
#[component]
pub fn Donate() -> impl IntoView {
    let donate = &use_site().donate;

    let methods = donate.methods.iter().map(|method| {
        let (panel_bg, label_text) = method.tone.panel_classes();
        let fields = method.fields.iter().map(|field| {
            let value_class = if field.mono { "font-mono font-bold text-gray-900" } else { "font-bold text-gray-900" };
            view! {
                <div class="flex justify-between py-2 border-b border-gray-100 last:border-0">
                    <span class="text-gray-500">{field.label.as_str()}</span>
                    <span class=value_class>{field.value.as_str()}</span>
                </div>
            }
        }).collect_view();

        view! {
            <div class="p-8 bg-white shadow-lg rounded-2xl">
                <div class="flex items-center gap-4 mb-6">
                    <div class=format!("flex items-center justify-center w-12 h-12 rounded-xl {}", method.tone.badge_classes())>
                        {outline_icon(&method.icon, "w-6 h-6")}
                    </div>
                    <div>
                        <h4 class="text-xl font-bold text-gray-900">{method.title.as_str()}</h4>
                        <p class=format!("text-sm font-medium {label_text}")>{method.subtitle.as_str()}</p>
                    </div>
                </div>
                <div class=format!("p-4 rounded-xl {panel_bg}")>
                    {fields}
                </div>
            </div>
        }
    }).collect_view();

    view! {
        <section id="donate" class="py-24 bg-gray-50">
            <div class="max-w-4xl px-6 mx-auto text-center">
                <h3 class="mb-4 text-3xl font-bold">{donate.heading.as_str()}</h3>
                <p class="mb-12 text-gray-600">{donate.intro.as_str()}</p>
                <div class="grid gap-8 text-left md:grid-cols-2">
                    {methods}
                </div>
            </div>
        </section>
    }
}
