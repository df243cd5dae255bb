/// Main application entry point for the Snow Design site.
/// Provides the shared site state and routes between the pages.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{
    faq::FaqAccordion,
    hero_stats::HeroStats,
    loading_overlay::{LoadingOverlay, PageReady},
    nav_bar::NavBar,
    notification::{NotificationHost, Notifications},
    profile_image::ProfileImage,
    review_form::ReviewForm,
    reviews_list::{ReviewsState, TestimonialsList},
    scroll_effects::{parallax_transform, provide_scroll_position, Reveal, ScrollPosition, HERO_PARALLAX_RATE, STATS_PARALLAX_RATE},
    typewriter::Typewriter,
};
use crate::config::SiteConfig;
use crate::offline::register_service_worker;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let reviews = ReviewsState::new(config.reviews_storage_key.clone());
    provide_context(Notifications::new(config.notification_timeout_ms));
    provide_context(reviews);
    provide_context(PageReady(create_rw_signal(false)));
    provide_context(config);
    provide_scroll_position();

    // Browser-only: stored reviews and the offline worker.
    create_effect(move |_| {
        reviews.reload();
        register_service_worker();
    });

    view! {
        <Title text="Snow Design" />
        <Stylesheet href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" />
        <Stylesheet href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css" />
        <Router>
            <LoadingOverlay />
            <NavBar />
            <main>
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/testimonials" view=TestimonialsPage />
                    <Route path="/faq" view=FaqPage />
                    <Route path="/contact" view=ContactPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
            <NotificationHost />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let scroll = expect_context::<ScrollPosition>();

    view! {
        <section class="hero" style:transform=move || parallax_transform(scroll.0.get(), HERO_PARALLAX_RATE)>
            <div class="hero-content">
                <h1 class="hero-title">
                    <Typewriter text="Design that feels effortless" speed_ms=config.typing_speed_ms />
                </h1>
                <p class="hero-subtitle">"Websites and brands for small teams with big plans."</p>
                <a href="/contact" class="btn btn-primary">"Leave a review"</a>
            </div>
            <ProfileImage src="/assets/images/profile.svg" alt="Snow Design founder" />
        </section>
        <section class="stats-hero" style:transform=move || parallax_transform(scroll.0.get(), STATS_PARALLAX_RATE)>
            <HeroStats projects=120 default_reviews=48 default_average="4.9" />
        </section>
    }
}

#[component]
fn TestimonialsPage() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h2>"What clients say"</h2>
            <TestimonialsList>
                <Reveal class="testimonial-card">
                    <div class="testimonial-content">
                        <p>"\"Snow Design rebuilt our site in three weeks and bookings doubled.\""</p>
                        <div class="testimonial-author">
                            <div class="author-avatar"><span>"MR"</span></div>
                            <div class="author-info">
                                <h4>"Maria Rossi"</h4>
                                <span>"Trattoria Rossi"</span>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </TestimonialsList>
        </section>
    }
}

#[component]
fn FaqPage() -> impl IntoView {
    view! {
        <section class="faq">
            <h2>"Frequently asked questions"</h2>
            <FaqAccordion />
        </section>
    }
}

#[component]
fn ContactPage() -> impl IntoView {
    view! {
        <section class="contact">
            <h2>"Share your experience"</h2>
            <ReviewForm />
        </section>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>"Page not found"</h2>
            <a href="/">"Back to home"</a>
        </section>
    }
}
