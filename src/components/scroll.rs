//! Window scrolling: smooth anchor links and the navbar's scroll state.

use dioxus::prelude::*;
use vitrine_core::navigation::{ANCHOR_OFFSET, MENU_SCROLL_OFFSET};
use vitrine_core::{navbar_scrolled, scroll_destination, AnchorTarget};

/// Viewport top of an element and the current page offset, or `null` if the
/// element does not exist.
fn measure_script(id: &str) -> String {
    let id = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
        const el = document.getElementById({id});
        dioxus.send(el ? [el.getBoundingClientRect().top, window.pageYOffset] : null);
        "#
    )
}

fn smooth_scroll_script(top: f64) -> String {
    format!("window.scrollTo({{ top: {top}, behavior: 'smooth' }});")
}

/// Smoothly scroll so the element `id` sits `nav_offset` below the window top.
/// Unknown ids are ignored.
pub async fn scroll_to_element(id: &str, nav_offset: f64) {
    let mut eval = document::eval(&measure_script(id));
    match eval.recv::<Option<(f64, f64)>>().await {
        Ok(Some((element_top, page_offset))) => {
            let top = scroll_destination(element_top, page_offset, nav_offset);
            let _ = document::eval(&smooth_scroll_script(top));
        }
        Ok(None) => tracing::debug!(id, "anchor target not found"),
        Err(e) => tracing::debug!(id, "failed to measure anchor target: {:?}", e),
    }
}

/// Follow an in-page link: `#` goes to the top, `#id` to the element.
pub fn follow_anchor(href: String) {
    match AnchorTarget::parse(&href) {
        Some(AnchorTarget::Top) => {
            let _ = document::eval(&smooth_scroll_script(0.0));
        }
        Some(AnchorTarget::Element(id)) => {
            spawn(async move {
                scroll_to_element(&id, ANCHOR_OFFSET).await;
            });
        }
        None => {}
    }
}

/// Scroll the menu to a section after a filter change.
pub fn scroll_to_section(id: String) {
    spawn(async move {
        scroll_to_element(&id, MENU_SCROLL_OFFSET).await;
    });
}

const SCROLL_LISTENER: &str = r#"
    dioxus.send(window.scrollY);
    window.addEventListener('scroll', () => dioxus.send(window.scrollY), { passive: true });
"#;

/// Whether the page is scrolled past the navbar threshold. Updates only when
/// the state flips, not on every scroll event.
pub fn use_navbar_scrolled() -> ReadOnlySignal<bool> {
    let mut scrolled = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(SCROLL_LISTENER);
            while let Ok(y) = eval.recv::<f64>().await {
                let now = navbar_scrolled(y);
                if *scrolled.peek() != now {
                    scrolled.set(now);
                }
            }
        });
    });

    scrolled.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_script_quotes_id() {
        let script = measure_script("steamed-momo");
        assert!(script.contains(r#"getElementById("steamed-momo")"#));
    }

    #[test]
    fn smooth_scroll_targets_offset() {
        assert_eq!(
            smooth_scroll_script(420.0),
            "window.scrollTo({ top: 420, behavior: 'smooth' });"
        );
    }
}
