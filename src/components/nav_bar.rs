use leptos::*;
use leptos_router::use_location;

use crate::components::scroll_effects::{navbar_style, ScrollPosition};

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/testimonials", "Testimonials"),
    ("/faq", "FAQ"),
    ("/contact", "Contact"),
];

/// Page a path points at: its last segment, or `index.html` for the root.
pub fn page_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some("") | None => "index.html",
        Some(last) => last,
    }
}

pub fn is_active_link(href: &str, current_path: &str) -> bool {
    page_name(href) == page_name(current_path)
}

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let scroll = expect_context::<ScrollPosition>();
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <nav class="navbar" style=move || navbar_style(scroll.0.get())>
            <div class="nav-container">
                <a href="/" class="nav-logo">"Snow Design"</a>
                <ul class="nav-menu" class:active=menu_open>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            let pathname = location.pathname;
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=href
                                        class="nav-link"
                                        class:active=move || is_active_link(href, &pathname.get())
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div
                    class="hamburger"
                    class:active=menu_open
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_name() {
        assert_eq!(page_name("/"), "index.html");
        assert_eq!(page_name(""), "index.html");
        assert_eq!(page_name("/faq"), "faq");
        assert_eq!(page_name("/site/contact.html"), "contact.html");
        assert_eq!(page_name("/faq/"), "index.html");
    }

    #[test]
    fn test_active_link() {
        assert!(is_active_link("/", "/"));
        assert!(is_active_link("/", "/index.html"));
        assert!(is_active_link("index.html", "/"));
        assert!(is_active_link("/faq", "/faq"));
        assert!(!is_active_link("/faq", "/contact"));
        assert!(!is_active_link("/", "/faq"));
    }
}
