use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub const COUNT_UP_DURATION_MS: u32 = 2000;
pub const FRAME_MS: u32 = 16;

/// Values shown on successive frames while counting from 0 up to `target`.
/// The last frame is always exactly `target`.
pub fn counter_frames(target: u32, duration_ms: u32, frame_ms: u32) -> Vec<u32> {
    let (target, duration, frame) = (u64::from(target), u64::from(duration_ms), u64::from(frame_ms.max(1)));
    let mut frames = Vec::new();
    if target > 0 {
        // Linear ramp: value at frame k is target * elapsed / duration, floored.
        let mut elapsed = frame;
        while elapsed < duration {
            frames.push((target * elapsed / duration) as u32);
            elapsed += frame;
        }
    }
    frames.push(target as u32);
    frames
}

/// Shows the frame at `index` and moves past it. False once the frames are
/// exhausted or the counter has been disposed.
fn advance_frame(frames: &[u32], index: StoredValue<usize>, set_value: WriteSignal<u32>) -> bool {
    let Some(i) = index.try_get_value() else {
        return false;
    };
    match frames.get(i) {
        Some(&frame) => {
            set_value.set(frame);
            index.set_value(i + 1);
            true
        }
        None => false,
    }
}

/// Number that counts up once `start` turns true.
#[component]
pub fn AnimatedCounter(target: u32, #[prop(into)] start: Signal<bool>) -> impl IntoView {
    let (value, set_value) = create_signal(target);
    let started = store_value(false);
    let handle: Rc<Cell<Option<IntervalHandle>>> = Rc::new(Cell::new(None));

    on_cleanup({
        let handle = handle.clone();
        move || {
            if let Some(h) = handle.take() {
                h.clear();
            }
        }
    });

    create_effect(move |_| {
        if !start.get() || started.get_value() {
            return;
        }
        started.set_value(true);
        let frames = counter_frames(target, COUNT_UP_DURATION_MS, FRAME_MS);
        let index = store_value(0usize);
        set_value.set(0);
        let tick = {
            let handle = handle.clone();
            move || {
                if !advance_frame(&frames, index, set_value) {
                    if let Some(h) = handle.take() {
                        h.clear();
                    }
                }
            }
        };
        match set_interval_with_handle(tick, Duration::from_millis(u64::from(FRAME_MS))) {
            Ok(h) => handle.set(Some(h)),
            Err(_) => set_value.set(target),
        }
    });

    view! { <span class="stat-number" data-target=target>{value}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::logging::log;

    #[test]
    fn test_frames_end_on_target() {
        let frames = counter_frames(50, 2000, 16);
        assert_eq!(frames.last(), Some(&50));
        assert_eq!(frames.len(), 125);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(frames[0], 0); // 0.4 floors to 0
    }

    #[test]
    fn test_frames_for_zero_target() {
        assert_eq!(counter_frames(0, 2000, 16), vec![0]);
    }

    #[test]
    fn test_short_duration() {
        assert_eq!(counter_frames(10, 16, 16), vec![10]);
    }

    #[test]
    fn test_frames_stop_after_last_and_after_dispose() {
        log!("[TEST] Starting test_frames_stop_after_last_and_after_dispose");
        let runtime = create_runtime();
        let frames = counter_frames(3, 32, 16);
        assert_eq!(frames, vec![1, 3]);

        let mount = as_child_of_current_owner(|_: ()| {
            let (value, set_value) = create_signal(0u32);
            (value, set_value, store_value(0usize))
        });
        let ((value, set_value, index), disposer) = mount(());
        assert!(advance_frame(&frames, index, set_value));
        assert_eq!(value.get_untracked(), 1);
        assert!(advance_frame(&frames, index, set_value));
        assert_eq!(value.get_untracked(), 3);
        assert!(!advance_frame(&frames, index, set_value));

        // A tick that fires after the counter unmounted must not touch its state.
        index.set_value(0);
        drop(disposer);
        assert!(!advance_frame(&frames, index, set_value));
        runtime.dispose();
    }
}
