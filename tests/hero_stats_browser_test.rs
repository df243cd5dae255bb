#![cfg(target_arch = "wasm32")]
use gloo_timers::future::sleep;
use leptos::logging::log;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use snowdesign::components::hero_stats::HeroStats;
use snowdesign::components::loading_overlay::PageReady;
use snowdesign::components::reviews_list::ReviewsState;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "heroStatsTestReviews";
const ONE_REVIEW: &str = r#"[{"id":"h1","name":"Jane Doe","email":"j@x.com","company":null,"rating":5,"comment":"Great","date":"2024-05-01T10:00:00.000Z"}]"#;

fn stat_numbers(container: &web_sys::HtmlElement) -> Vec<String> {
    let nodes = container.query_selector_all(".stat-number").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

#[wasm_bindgen_test]
async fn test_authored_defaults_until_a_review_is_stored() {
    log!("[TEST] Starting test_authored_defaults_until_a_review_is_stored");
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(KEY).unwrap();

    let document = leptos::document();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let state_slot: Rc<Cell<Option<ReviewsState>>> = Rc::new(Cell::new(None));
    let slot = state_slot.clone();
    leptos::mount_to(container.clone(), move || {
        let state = ReviewsState::new(KEY.to_string());
        provide_context(state);
        // Counters stay on their targets while the page is not ready.
        provide_context(PageReady(create_rw_signal(false)));
        state.reload();
        slot.set(Some(state));
        view! { <HeroStats projects=120 default_reviews=48 default_average="4.9" /> }
    });
    sleep(Duration::from_millis(50)).await;

    assert_eq!(stat_numbers(&container), vec!["120", "48", "4.9"]);

    storage.set_item(KEY, ONE_REVIEW).unwrap();
    state_slot.get().expect("state was provided").reload();
    sleep(Duration::from_millis(50)).await;

    assert_eq!(stat_numbers(&container), vec!["120", "1", "5.0"]);

    storage.remove_item(KEY).unwrap();
    container.remove();
}
