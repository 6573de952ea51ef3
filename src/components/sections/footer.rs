use chrono::Datelike;
use leptos::prelude::*;
use crate::app_state::use_site;

pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let year = chrono::Utc::now().year();
    view! {
        <footer class="py-8 text-center text-gray-400 bg-gray-900">
            <p class="text-sm">{copyright_line(year, &site.brand.footer_owner)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_owner() {
        assert_eq!(
            copyright_line(2026, "Mountain Prayer Center"),
            "© 2026 Mountain Prayer Center. All rights reserved."
        );
    }
}
