use leptos::html::Img;
use leptos::*;

use crate::theme::apply_theme_from_image;

/// Profile photo; once loaded, its dominant color themes the page.
#[component]
pub fn ProfileImage(#[prop(into)] src: String, #[prop(into)] alt: String) -> impl IntoView {
    let node_ref = create_node_ref::<Img>();

    // The image may already be decoded (cached) before hydration attaches on:load.
    create_effect(move |_| {
        if let Some(img) = node_ref.get() {
            if img.complete() && img.natural_width() > 0 {
                apply_theme_from_image(&img);
            }
        }
    });

    view! {
        <img
            class="profile-img"
            src=src
            alt=alt
            crossorigin="anonymous"
            node_ref=node_ref
            on:load=move |_| {
                if let Some(img) = node_ref.get_untracked() {
                    apply_theme_from_image(&img);
                }
            }
        />
    }
}
