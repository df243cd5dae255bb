//! Review form state machine: rating selection, validation, local save, remote notify.
use std::cell::RefCell;

use chrono::Utc;
use leptos::logging::{log, warn};

use crate::models::rating::{Rating, RatingError, UNRATED_LABEL};
use crate::models::review::{Review, ReviewFields};
use crate::notify::{Notifier, Severity};
use crate::storage::KeyValueStorage;
use crate::store::ReviewStore;
use crate::submit::{interpret_response, FormPayload, ReviewSubmitter, SubmitOutcome};

pub const MISSING_RATING_MESSAGE: &str = "Please select a rating before submitting.";
pub const THANK_YOU_MESSAGE: &str = "Thank you for your review! It will be displayed on our website.";

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Idle,
    RatingSelected(Rating),
    Submitting(Rating),
    // The rating stays selected so the user can retry.
    Failed { rating: Rating, message: String },
}

impl FormState {
    pub fn rating(&self) -> Option<Rating> {
        match self {
            FormState::Idle => None,
            FormState::RatingSelected(r) | FormState::Submitting(r) => Some(*r),
            FormState::Failed { rating, .. } => Some(*rating),
        }
    }

    pub fn rating_label(&self) -> &'static str {
        self.rating().map(Rating::label).unwrap_or(UNRATED_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// Refused before any side effect.
    MissingRating,
    Succeeded(Review),
    Failed { review: Review, message: String },
}

pub struct ReviewFormController<S, T, N> {
    store: ReviewStore<S>,
    submitter: T,
    notifier: N,
    state: RefCell<FormState>,
}

impl<S, T, N> ReviewFormController<S, T, N>
where
    S: KeyValueStorage,
    T: ReviewSubmitter,
    N: Notifier,
{
    pub fn new(store: ReviewStore<S>, submitter: T, notifier: N) -> Self {
        ReviewFormController {
            store,
            submitter,
            notifier,
            state: RefCell::new(FormState::Idle),
        }
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn store(&self) -> &ReviewStore<S> {
        &self.store
    }

    /// Selects a star value and returns its label.
    pub fn select_rating(&self, value: u8) -> Result<&'static str, RatingError> {
        let rating = Rating::new(value)?;
        *self.state.borrow_mut() = FormState::RatingSelected(rating);
        Ok(rating.label())
    }

    pub fn reset(&self) {
        *self.state.borrow_mut() = FormState::Idle;
    }

    /// Runs one submission attempt.
    ///
    /// The review is saved locally before the network attempt and is kept
    /// whatever the endpoint answers.
    pub async fn submit(&self, fields: ReviewFields) -> SubmissionResult {
        let Some(rating) = self.state.borrow().rating() else {
            self.notifier.notify(MISSING_RATING_MESSAGE, Severity::Error);
            return SubmissionResult::MissingRating;
        };
        *self.state.borrow_mut() = FormState::Submitting(rating);

        let review = Review::new(fields, rating, Utc::now());
        if let Err(err) = self.store.save(&review) {
            warn!("[REVIEW_FORM] Review not persisted locally: {}", err);
        }

        let result = self.submitter.submit(FormPayload::from(&review)).await;
        match interpret_response(result) {
            SubmitOutcome::Accepted => {
                log!("[REVIEW_FORM] Review accepted by endpoint");
                self.notifier.notify(THANK_YOU_MESSAGE, Severity::Success);
                self.reset();
                SubmissionResult::Succeeded(review)
            }
            SubmitOutcome::Rejected(message) => {
                log!("[REVIEW_FORM] Review submission failed: {}", message);
                self.notifier.notify(&message, Severity::Error);
                *self.state.borrow_mut() = FormState::Failed {
                    rating,
                    message: message.clone(),
                };
                SubmissionResult::Failed { review, message }
            }
        }
    }
}
