use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;

pub const LOADING_STEPS: [&str; 5] = [
    "Initializing...",
    "Loading assets...",
    "Preparing content...",
    "Almost ready...",
    "Welcome to Snow Design!",
];

/// Turns true once the loading overlay is gone; stat counters wait for it.
#[derive(Clone, Copy)]
pub struct PageReady(pub RwSignal<bool>);

/// Width of the progress bar at `step`, in percent.
pub fn loading_progress(step: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (step.min(total) * 100) as f64 / total as f64
}

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let ready = expect_context::<PageReady>();
    let (step, set_step) = create_signal(0usize);
    let (hidden, set_hidden) = create_signal(false);
    let (removed, set_removed) = create_signal(false);

    create_effect(move |_| {
        spawn_local(async move {
            sleep(Duration::from_millis(500)).await;
            for i in 0..LOADING_STEPS.len() {
                set_step.set(i);
                if i + 1 < LOADING_STEPS.len() {
                    sleep(Duration::from_millis(800)).await;
                }
            }
            sleep(Duration::from_millis(1000)).await;
            set_hidden.set(true);
            sleep(Duration::from_millis(500)).await;
            set_removed.set(true);
            ready.0.set(true);
        });
    });

    move || {
        (!removed.get()).then(|| {
            view! {
                <div id="loadingOverlay" class="loading-overlay" class:hidden=hidden>
                    <div class="loading-bar-track">
                        <div
                            id="loadingBar"
                            class="loading-bar"
                            style:width=move || format!("{}%", loading_progress(step.get(), LOADING_STEPS.len()))
                        ></div>
                    </div>
                    <p id="loadingText">{move || LOADING_STEPS[step.get()]}</p>
                </div>
            }
        })
    }
}
