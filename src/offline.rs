//! Offline cache worker. Runs inside the service worker (see `assets/sw.js`) and
//! only ever talks to Cache Storage; review data in localStorage is never touched.
use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Array, Promise};
use leptos::logging::{log, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local, JsFuture};
use web_sys::{Cache, ExtendableEvent, FetchEvent, Request, Response, ServiceWorkerGlobalScope};

pub const CACHE_NAME: &str = "snow-design-v5";
pub const WORKER_SCRIPT: &str = "/sw.js";

const PRECACHE: [&str; 9] = [
    "/",
    "/testimonials",
    "/faq",
    "/contact",
    "/pkg/snowdesign.js",
    "/pkg/snowdesign_bg.wasm",
    "/assets/images/profile.svg",
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap",
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css",
];

/// Assets fetched at install time, without duplicates (`Cache.addAll` rejects them).
pub fn precache_urls() -> Vec<&'static str> {
    let mut urls: Vec<&'static str> = Vec::with_capacity(PRECACHE.len());
    for url in PRECACHE {
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

/// Whether a network response may refresh the cache.
pub fn should_store(method: &str, status: u16, url: &str, origin: &str) -> bool {
    method.eq_ignore_ascii_case("GET") && status == 200 && url.starts_with(origin)
}

/// Caches left behind by previous worker versions.
pub fn stale_caches(names: &[String], current: &str) -> Vec<String> {
    names.iter().filter(|name| *name != current).cloned().collect()
}

fn scope() -> ServiceWorkerGlobalScope {
    js_sys::global().unchecked_into()
}

async fn open_cache(name: &str) -> Result<Cache, JsValue> {
    let caches = scope().caches()?;
    JsFuture::from(caches.open(name)).await?.dyn_into()
}

#[wasm_bindgen]
pub fn handle_install(_event: ExtendableEvent) -> Promise {
    future_to_promise(async move {
        let cache = open_cache(CACHE_NAME).await?;
        let urls = precache_urls();
        let list = JsValue::from_serde(&urls).map_err(|e| JsValue::from_str(&e.to_string()))?;
        JsFuture::from(cache.add_all_with_str_sequence(&list)).await?;
        log!("[SW] Precached {} assets into {}", urls.len(), CACHE_NAME);
        Ok(JsValue::UNDEFINED)
    })
}

#[wasm_bindgen]
pub fn handle_activate(_event: ExtendableEvent) -> Promise {
    future_to_promise(async move {
        let caches = scope().caches()?;
        let keys: Array = JsFuture::from(caches.keys()).await?.dyn_into()?;
        let names: Vec<String> = keys.iter().filter_map(|k| k.as_string()).collect();
        for name in stale_caches(&names, CACHE_NAME) {
            JsFuture::from(caches.delete(&name)).await?;
            log!("[SW] Deleted stale cache {}", name);
        }
        Ok(JsValue::UNDEFINED)
    })
}

/// Cached copy first, refreshed in the background; network when uncached.
#[wasm_bindgen]
pub fn handle_fetch(event: FetchEvent) -> Promise {
    let request = event.request();
    future_to_promise(async move {
        let cache = open_cache(CACHE_NAME).await?;
        let cached = JsFuture::from(cache.match_with_request(&request)).await?;
        let network = fetch_and_store(cache, request);
        if cached.is_undefined() {
            return network.await;
        }
        spawn_local(async move {
            if let Err(err) = network.await {
                warn!("[SW] Background refresh failed: {:?}", err);
            }
        });
        Ok(cached)
    })
}

async fn fetch_and_store(cache: Cache, request: Request) -> Result<JsValue, JsValue> {
    let scope = scope();
    let response: Response = JsFuture::from(scope.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let origin = scope.location().origin();
    if should_store(&request.method(), response.status(), &request.url(), &origin) {
        let copy = response.clone()?;
        spawn_local(async move {
            if let Err(err) = JsFuture::from(cache.put_with_request(&request, &copy)).await {
                warn!("[SW] Cache put failed: {:?}", err);
            }
        });
    }
    Ok(response.into())
}

/// Registers the worker from the page. Failures only get logged.
pub fn register_service_worker() {
    let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
        return;
    };
    let container = navigator.service_worker();
    // Module worker: `sw.js` imports the wasm bundle.
    let options = js_sys::Object::new();
    if js_sys::Reflect::set(&options, &"type".into(), &"module".into()).is_err() {
        return;
    }
    let promise = container.register_with_options(WORKER_SCRIPT, options.unchecked_ref());
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log!("[SW] Registered {}", WORKER_SCRIPT),
            Err(err) => warn!("[SW] Registration failed: {:?}", err),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precache_list_has_no_duplicates() {
        let urls = precache_urls();
        assert_eq!(urls.len(), PRECACHE.len());
        assert_eq!(urls[0], "/");
        let mut sorted = urls.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), urls.len());
    }

    #[test]
    fn test_only_same_origin_ok_gets_are_stored() {
        let origin = "https://snow.design";
        assert!(should_store("GET", 200, "https://snow.design/faq", origin));
        assert!(!should_store("GET", 404, "https://snow.design/faq", origin));
        assert!(!should_store("GET", 200, "https://cdn.example.com/x.css", origin));
        assert!(!should_store("POST", 200, "https://snow.design/reviews", origin));
    }

    #[test]
    fn test_stale_caches() {
        let names = vec![
            "snow-design-v4".to_string(),
            CACHE_NAME.to_string(),
            "other".to_string(),
        ];
        assert_eq!(stale_caches(&names, CACHE_NAME), vec!["snow-design-v4", "other"]);
        assert!(stale_caches(&[CACHE_NAME.to_string()], CACHE_NAME).is_empty());
    }
}
