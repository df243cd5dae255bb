use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// The first `count` characters of `text`.
pub fn typed_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Types one more character. False once the text is complete or the
/// heading has been disposed.
fn type_next(typed: ReadSignal<usize>, set_typed: WriteSignal<usize>, len: usize) -> bool {
    let Some(current) = typed.try_get_untracked() else {
        return false;
    };
    let next = (current + 1).min(len);
    set_typed.set(next);
    next < len
}

/// Heading text that re-types itself one character at a time after mounting.
#[component]
pub fn Typewriter(
    #[prop(into)] text: String,
    #[prop(default = 80)] speed_ms: u64,
    #[prop(default = 500)] delay_ms: u64,
) -> impl IntoView {
    let len = text.chars().count();
    // Fully typed until the animation starts, so server markup is complete.
    let (typed, set_typed) = create_signal(len);
    let delay: Rc<Cell<Option<TimeoutHandle>>> = Rc::new(Cell::new(None));
    let interval: Rc<Cell<Option<IntervalHandle>>> = Rc::new(Cell::new(None));

    on_cleanup({
        let (delay, interval) = (delay.clone(), interval.clone());
        move || {
            if let Some(h) = delay.take() {
                h.clear();
            }
            if let Some(h) = interval.take() {
                h.clear();
            }
        }
    });

    create_effect(move |_| {
        let interval = interval.clone();
        let start = move || {
            set_typed.set(0);
            let tick = {
                let interval = interval.clone();
                move || {
                    if !type_next(typed, set_typed, len) {
                        if let Some(h) = interval.take() {
                            h.clear();
                        }
                    }
                }
            };
            match set_interval_with_handle(tick, Duration::from_millis(speed_ms)) {
                Ok(h) => interval.set(Some(h)),
                Err(_) => set_typed.set(len),
            }
        };
        if let Ok(h) = set_timeout_with_handle(start, Duration::from_millis(delay_ms)) {
            delay.set(Some(h));
        }
    });

    move || typed_prefix(&text, typed.get()).to_string()
}
