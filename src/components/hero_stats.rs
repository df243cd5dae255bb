use leptos::*;

use crate::components::counter::AnimatedCounter;
use crate::components::loading_overlay::PageReady;
use crate::components::reviews_list::ReviewsState;
use crate::presenter::compute_stats;

/// Hero stat cluster. Review count and average come from stored reviews when
/// there are any; otherwise the authored defaults are shown.
#[component]
pub fn HeroStats(
    projects: u32,
    default_reviews: u32,
    #[prop(into)] default_average: String,
) -> impl IntoView {
    let reviews = expect_context::<ReviewsState>();
    let ready = expect_context::<PageReady>();
    let stats = create_memo(move |_| compute_stats(&reviews.reviews().get()));

    view! {
        <div class="hero-stats">
            <div class="stat">
                <AnimatedCounter target=projects start=ready.0 />
                <span class="stat-label">"Projects delivered"</span>
            </div>
            <div class="stat">
                {move || match stats.get() {
                    Some(s) => view! { <span class="stat-number">{s.count}</span> }.into_view(),
                    None => view! { <AnimatedCounter target=default_reviews start=ready.0 /> }.into_view(),
                }}
                <span class="stat-label">"Client reviews"</span>
            </div>
            <div class="stat">
                <span class="stat-number">
                    {
                        let default_average = default_average.clone();
                        move || stats.get().map(|s| s.average_label()).unwrap_or_else(|| default_average.clone())
                    }
                </span>
                <span class="stat-label">"Average rating"</span>
            </div>
        </div>
    }
}
