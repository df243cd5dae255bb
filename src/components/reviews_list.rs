/// Testimonial cards rendered from the stored reviews.
/// Hand-written placeholder markup stays in place until there is at least one review.
use leptos::logging::warn;
use leptos::*;

use crate::components::notification::Notifications;
use crate::models::review::Review;
use crate::notify::{Notifier, Severity};
use crate::presenter::ReviewCard;
use crate::storage::BrowserStorage;
use crate::store::{ReviewStore, StoreError};

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this review?";

/// Page-wide view of the stored reviews, reloaded from storage after each mutation.
#[derive(Clone, Copy)]
pub struct ReviewsState {
    reviews: RwSignal<Vec<Review>>,
    storage_key: StoredValue<String>,
}

impl ReviewsState {
    pub fn new(storage_key: String) -> Self {
        ReviewsState {
            reviews: create_rw_signal(Vec::new()),
            storage_key: store_value(storage_key),
        }
    }

    pub fn reviews(&self) -> Signal<Vec<Review>> {
        self.reviews.into()
    }

    pub fn store(&self) -> ReviewStore<BrowserStorage> {
        ReviewStore::with_key(BrowserStorage, self.storage_key.get_value())
    }

    pub fn reload(&self) {
        self.reviews.set(self.store().list());
    }

    pub fn delete(&self, review: &Review) -> Result<usize, StoreError> {
        let removed = self.store().delete(review);
        self.reload();
        removed
    }
}

fn confirm_delete() -> bool {
    window()
        .confirm_with_message(DELETE_CONFIRMATION)
        .unwrap_or(false)
}

#[component]
pub fn TestimonialsList(
    /// Static testimonials shown while nothing is stored.
    children: ChildrenFn,
) -> impl IntoView {
    let state = expect_context::<ReviewsState>();

    view! {
        <div id="testimonialsContainer" class="testimonials-grid">
            {move || {
                let reviews = state.reviews().get();
                if reviews.is_empty() {
                    children().into_view()
                } else {
                    reviews
                        .into_iter()
                        .map(|review| view! { <TestimonialCard review=review /> })
                        .collect_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn TestimonialCard(review: Review) -> impl IntoView {
    let state = expect_context::<ReviewsState>();
    let notifications = expect_context::<Notifications>();
    let card = ReviewCard::from(&review);

    let on_delete = move |_| {
        if !confirm_delete() {
            return;
        }
        match state.delete(&review) {
            Ok(_) => notifications.notify("Review deleted successfully", Severity::Success),
            Err(err) => {
                warn!("[REVIEWS] Delete failed: {}", err);
                notifications.notify("Could not delete the review.", Severity::Error);
            }
        }
    };

    view! {
        <div class="testimonial-card">
            <div class="testimonial-content">
                <div class="testimonial-header">
                    <div class="stars">
                        {card
                            .stars
                            .iter()
                            .map(|star| {
                                view! {
                                    <i class="fas fa-star" style=format!("color: {}", star.color())></i>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button class="delete-review-btn" title="Delete Review" on:click=on_delete>
                        <i class="fas fa-trash"></i>
                    </button>
                </div>
                <p>{format!("\"{}\"", card.comment)}</p>
                <div class="testimonial-author">
                    <div class="author-avatar">
                        <span>{card.initials}</span>
                    </div>
                    <div class="author-info">
                        <h4>{card.name}</h4>
                        <span>{card.company_label}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
