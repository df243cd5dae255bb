/// Scroll-driven cosmetics: navbar background, parallax and reveal-on-scroll.
use leptos::html::Div;
use leptos::*;

pub const NAVBAR_SOLID_AFTER: f64 = 100.0;
pub const HERO_PARALLAX_RATE: f64 = -0.5;
pub const STATS_PARALLAX_RATE: f64 = -0.3;
/// Distance from the viewport bottom an element must pass to be revealed.
pub const REVEAL_OFFSET: f64 = 150.0;

/// Vertical scroll offset of the window, updated on every scroll event.
#[derive(Clone, Copy)]
pub struct ScrollPosition(pub ReadSignal<f64>);

pub fn provide_scroll_position() {
    let (scroll_y, set_scroll_y) = create_signal(0.0);
    create_effect(move |_| {
        let _ = window_event_listener(ev::scroll, move |_| {
            set_scroll_y.set(window().scroll_y().unwrap_or(0.0));
        });
    });
    provide_context(ScrollPosition(scroll_y));
}

pub fn navbar_style(scrolled: f64) -> &'static str {
    if scrolled > NAVBAR_SOLID_AFTER {
        "background: rgba(255, 255, 255, 0.98); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);"
    } else {
        "background: rgba(255, 255, 255, 0.95); box-shadow: none;"
    }
}

pub fn parallax_transform(scrolled: f64, rate: f64) -> String {
    format!("translateY({}px)", scrolled * rate)
}

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_OFFSET
}

/// Wrapper that gets `animation_class` once it has scrolled into view. Sticky.
#[component]
pub fn Reveal(
    #[prop(default = "animate-slide-up")] animation_class: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let scroll = expect_context::<ScrollPosition>();
    let node_ref = create_node_ref::<Div>();
    let (revealed, set_revealed) = create_signal(false);

    create_effect(move |_| {
        let _ = scroll.0.get();
        if revealed.get_untracked() {
            return;
        }
        let Some(el) = node_ref.get() else { return };
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        if should_reveal(el.get_bounding_client_rect().top(), viewport) {
            set_revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=move || {
                if revealed.get() {
                    format!("fade-in visible {} {}", class, animation_class)
                } else {
                    format!("fade-in {}", class)
                }
            }
        >
            {children()}
        </div>
    }
}
