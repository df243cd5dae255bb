use leptos::ev::SubmitEvent;
use leptos::*;
use std::rc::Rc;

use crate::components::notification::Notifications;
use crate::components::reviews_list::ReviewsState;
use crate::config::SiteConfig;
use crate::controller::{FormState, ReviewFormController, SubmissionResult};
use crate::models::rating::Rating;
use crate::models::review::ReviewFields;
use crate::submit::HttpSubmitter;
use crate::utils::leptos_owner::with_owner_safe;

#[component]
pub fn ReviewForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notifications = expect_context::<Notifications>();
    let reviews = expect_context::<ReviewsState>();

    let controller = Rc::new(ReviewFormController::new(
        reviews.store(),
        HttpSubmitter::new(config.form_endpoint.clone(), config.form_method),
        notifications,
    ));

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (company, set_company) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    // Mirror of the controller's state for rendering.
    let form_state = create_rw_signal(FormState::Idle);

    let select_rating = {
        let controller = controller.clone();
        move |value: u8| {
            if controller.select_rating(value).is_ok() {
                form_state.set(controller.state());
            }
        }
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let fields = ReviewFields {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            message: message.get_untracked(),
        };
        let controller = controller.clone();
        let owner = Owner::current();
        spawn_local(async move {
            let result = controller.submit(fields).await;
            with_owner_safe(owner, "[REVIEW_FORM] submission finished", || {
                form_state.set(controller.state());
                if result == SubmissionResult::MissingRating {
                    return;
                }
                reviews.reload();
                if let SubmissionResult::Succeeded(_) = result {
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_company.set(String::new());
                    set_message.set(String::new());
                }
            });
        });
    };

    view! {
        <form id="reviewForm" class="review-form" on:submit=handle_submit>
            <div class="form-group">
                <label for="review-name">"Name"</label>
                <input id="review-name" type="text" name="name" required
                    prop:value=name
                    on:input=move |e| set_name.set(event_target_value(&e)) />
            </div>
            <div class="form-group">
                <label for="review-email">"Email"</label>
                <input id="review-email" type="email" name="email" required
                    prop:value=email
                    on:input=move |e| set_email.set(event_target_value(&e)) />
            </div>
            <div class="form-group">
                <label for="review-company">"Company (optional)"</label>
                <input id="review-company" type="text" name="company"
                    prop:value=company
                    on:input=move |e| set_company.set(event_target_value(&e)) />
            </div>
            <div class="form-group rating-group">
                <label>"Your rating"</label>
                <div class="rating-stars">
                    {(1..=Rating::MAX)
                        .map(|value| {
                            let select_rating = select_rating.clone();
                            view! {
                                <button
                                    type="button"
                                    class="rating-star"
                                    data-rating=value
                                    class:active=move || {
                                        form_state.get().rating().is_some_and(|r| value <= r.value())
                                    }
                                    on:click=move |_| select_rating(value)
                                >
                                    <i class="fas fa-star"></i>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="rating-text">{move || form_state.get().rating_label()}</span>
            </div>
            <div class="form-group">
                <label for="review-message">"Your review"</label>
                <textarea id="review-message" name="message" rows="5" required
                    prop:value=message
                    on:input=move |e| set_message.set(event_target_value(&e)) />
            </div>
            <button type="submit" class="btn btn-primary">"Submit Review"</button>
        </form>
    }
}
