//! Landing page navigation bar

use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use crate::config::use_config;

const SECTION_SCROLL_BEHAVIOR: ScrollBehavior = ScrollBehavior::Smooth;

const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("about", "About"),
    ("products", "Products"),
    ("contact", "Contact"),
];

/// Whether the page has scrolled far enough for the opaque navbar
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Smooth-scroll to a landing section by element id
pub fn scroll_to_section(id: &str) -> bool {
    match document().get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(SECTION_SCROLL_BEHAVIOR);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            tracing::debug!(id, "section not on this page");
            false
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let threshold = use_config().nav_scroll_threshold;
    let (mobile_open, set_mobile_open) = create_signal(false);
    let (scrolled, set_scrolled) = create_signal(false);

    let listener = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        let next = is_scrolled(y, threshold);
        if next != scrolled.get_untracked() {
            set_scrolled.set(next);
        }
    });
    on_cleanup(move || listener.remove());

    let go_to = move |id: &'static str| {
        if scroll_to_section(id) {
            set_mobile_open.set(false);
        }
    };

    let nav_class = move || {
        if scrolled.get() {
            "fixed w-full z-40 transition-all duration-300 bg-white shadow-lg"
        } else {
            "fixed w-full z-40 transition-all duration-300 bg-transparent"
        }
    };
    let link_class = move || {
        if scrolled.get() {
            "hover:scale-105 transition-all px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:text-blue-600"
        } else {
            "hover:scale-105 transition-all px-3 py-2 rounded-md text-sm font-medium text-white hover:text-blue-200"
        }
    };
    let brand_class = move || {
        if scrolled.get() { "text-xl font-bold text-gray-900" } else { "text-xl font-bold text-white" }
    };
    let toggle_class = move || {
        if scrolled.get() { "p-2 rounded-md text-gray-700" } else { "p-2 rounded-md text-white" }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <div class="flex items-center">
                        <img src="/himavan_logo.svg" alt="logo" class="h-12 w-12 mr-2"/>
                        <span class=brand_class>"HIMAVAN"</span>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-8">
                            {SECTIONS.into_iter().map(|(id, label)| view! {
                                <button class=link_class on:click=move |_| go_to(id)>{label}</button>
                            }).collect_view()}
                        </div>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden">
                        <button
                            class=toggle_class
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden bg-white shadow-lg">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {SECTIONS.into_iter().map(|(id, label)| view! {
                            <button
                                class="block px-3 py-2 text-gray-700 hover:text-blue-600 w-full text-left"
                                on:click=move |_| go_to(id)
                            >
                                {label}
                            </button>
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }

    #[test]
    fn test_section_scroll_is_smooth() {
        assert_eq!(SECTION_SCROLL_BEHAVIOR, ScrollBehavior::Smooth);
    }

    #[test]
    fn test_sections_have_unique_ids() {
        let mut ids: Vec<&str> = SECTIONS.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }
}
