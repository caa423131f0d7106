//! Hooks and helpers bridging components to the page window.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use vitrine_core::{CounterAnimation, LightboxKey, VisibilityLatch};

use crate::components::lightbox_key;

/// Frame interval for counter animations (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Observer settings for [`use_first_visible`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// CSS margin applied to the viewport
    pub root_margin: &'static str,
}

impl VisibilityOptions {
    /// Stat counters start once half visible.
    pub const COUNTER: Self = Self {
        threshold: 0.5,
        root_margin: "0px",
    };

    /// Reveal-on-scroll fades start just before the element clears the bottom edge.
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };
}

/// JavaScript that reports the first time `element_id` becomes visible.
pub fn visibility_script(element_id: &str, options: VisibilityOptions) -> String {
    // serde_json gives a correctly escaped JS string literal.
    let id = serde_json::to_string(element_id).unwrap_or_else(|_| "\"\"".to_string());
    let margin = serde_json::to_string(options.root_margin).unwrap_or_else(|_| "\"0px\"".to_string());
    format!(
        r#"
        const el = document.getElementById({id});
        if (el) {{
            const observer = new IntersectionObserver((entries) => {{
                entries.forEach((entry) => {{
                    if (entry.isIntersecting) {{
                        observer.unobserve(entry.target);
                        dioxus.send(true);
                    }}
                }});
            }}, {{ threshold: {threshold}, rootMargin: {margin} }});
            observer.observe(el);
        }}
        "#,
        id = id,
        threshold = options.threshold,
        margin = margin,
    )
}

/// Becomes `true` the first time the element with `element_id` scrolls into
/// view, and stays `true`. The element must be rendered by the calling
/// component.
pub fn use_first_visible(element_id: String, options: VisibilityOptions) -> ReadOnlySignal<bool> {
    let mut visible = use_signal(|| false);
    let mut latch = use_signal(VisibilityLatch::new);

    use_effect(move || {
        let script = visibility_script(&element_id, options);
        let element_id = element_id.clone();
        spawn(async move {
            let mut eval = document::eval(&script);
            loop {
                match eval.recv::<bool>().await {
                    Ok(seen) => {
                        if latch.write().observe(seen) {
                            tracing::trace!(element = %element_id, "element became visible");
                            visible.set(true);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(element = %element_id, "visibility observer ended: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    visible.into()
}

// One document listener at a time; a remount replaces the previous one.
const KEY_LISTENER: &str = r#"
    if (window.vitrineKeyListener) {
        document.removeEventListener('keydown', window.vitrineKeyListener);
    }
    window.vitrineKeyListener = (e) => dioxus.send(e.key);
    document.addEventListener('keydown', window.vitrineKeyListener);
"#;

const KEY_LISTENER_REMOVE: &str = r#"
    if (window.vitrineKeyListener) {
        document.removeEventListener('keydown', window.vitrineKeyListener);
        window.vitrineKeyListener = null;
    }
"#;

/// Forward Escape and the arrow keys pressed anywhere on the page to
/// `on_key`, whichever element has focus.
///
/// Keys arrive whether or not a lightbox is open; the handler decides whether
/// they mean anything. The listener is removed when the component unmounts.
pub fn use_lightbox_keys(on_key: Callback<LightboxKey>) {
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(KEY_LISTENER);
            loop {
                match eval.recv::<String>().await {
                    Ok(name) => {
                        if let Some(key) = lightbox_key(&name) {
                            tracing::trace!(?key, "lightbox key");
                            on_key.call(key);
                        }
                    }
                    Err(e) => {
                        tracing::debug!("key listener ended: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    use_drop(|| {
        let _ = document::eval(KEY_LISTENER_REMOVE);
    });
}

/// Enable or disable scrolling of the page behind an overlay.
pub fn set_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "auto" };
    tracing::debug!(locked, "page scroll lock");
    let _ = document::eval(&format!("document.body.style.overflow = '{}';", overflow));
}

/// Write the animation's value into `display` once per frame until it lands
/// on its target.
pub async fn run_counter(animation: CounterAnimation, mut display: Signal<i64>) {
    let started = Instant::now();
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    loop {
        ticker.tick().await;
        let elapsed = started.elapsed();
        display.set(animation.value_at(elapsed));
        if animation.is_complete(elapsed) {
            break;
        }
    }
}
