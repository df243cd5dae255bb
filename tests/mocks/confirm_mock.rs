use wasm_bindgen::prelude::*;

/// This module replaces `window.confirm` so delete flows can run
/// without a blocking browser dialog.

/// Makes every `window.confirm` call answer `answer`, counting the calls.
pub fn setup_confirm_mock(answer: bool) -> bool {
    #[wasm_bindgen(inline_js = r#"
    export function setup_confirm_mock(answer) {
        window.__confirmCalls = 0;
        window.confirm = function(message) {
            console.log("[MOCK CONFIRM] Asked:", message, "answering:", answer);
            window.__confirmCalls++;
            return answer;
        };
        return typeof window.confirm === 'function';
    }
    "#)]
    extern "C" {
        fn setup_confirm_mock(answer: bool) -> bool;
    }

    setup_confirm_mock(answer)
}

/// Number of confirmation prompts since the last setup.
pub fn confirm_calls() -> u32 {
    #[wasm_bindgen(inline_js = r#"
    export function confirm_calls() {
        return window.__confirmCalls || 0;
    }
    "#)]
    extern "C" {
        fn confirm_calls() -> u32;
    }

    confirm_calls()
}
