use std::fmt::Debug;

use log::warn;
use web_sys::{Element, ScrollRestoration};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// How far an element has to clear the bottom of the viewport before it
/// counts as seen.
pub const REVEAL_MARGIN: f64 = 80.0;

pub fn has_entered_view(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

/// True once `node` has scrolled into view. Never flips back.
#[hook]
pub fn use_in_view(node: NodeRef, margin: f64) -> bool {
    let seen = use_state_eq(|| false);
    let scroll = use_window_scroll();
    let size = use_window_size();

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |deps: &(f64, f64)| {
                let viewport_height = deps.1;
                if !*seen {
                    if let Some(element) = node.cast::<Element>() {
                        let top = element.get_bounding_client_rect().top();
                        if has_entered_view(top, viewport_height, margin) {
                            seen.set(true);
                        }
                    }
                }
                || ()
            },
            (scroll.1, size.1),
        );
    }

    *seen
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    FadeUp,
    FromLeft,
    FromRight,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::FadeUp => "reveal-up",
            Motion::FromLeft => "reveal-left",
            Motion::FromRight => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(Motion::FadeUp)]
    pub motion: Motion,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), REVEAL_MARGIN);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.motion.class(), visible.then_some("visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Scrolls the element with `id` into view. False if there is no such element.
pub fn scroll_to_id(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match element {
        Some(element) => {
            element.scroll_into_view();
            true
        }
        None => false,
    }
}

/// Logs a failed browser call. Returns whether it succeeded.
pub fn warn_on_err<E: Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!("Could not {}: {:?}", action, err);
            false
        }
    }
}

/// Page entry: take scroll restoration away from the browser and start at the top.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(history) = window.history() {
                    warn_on_err(
                        "set scroll restoration",
                        history.set_scroll_restoration(ScrollRestoration::Manual),
                    );
                }
            }
            scroll_to_top();
            || ()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_browser_calls_are_reported() {
        assert!(warn_on_err::<String>("scroll", Ok(())));
        assert!(!warn_on_err("show alert", Err("blocked by the page")));
    }

    #[test]
    fn element_below_the_fold_is_not_in_view() {
        assert!(!has_entered_view(900.0, 800.0, REVEAL_MARGIN));
        assert!(!has_entered_view(750.0, 800.0, REVEAL_MARGIN));
    }

    #[test]
    fn element_past_the_margin_is_in_view() {
        assert!(has_entered_view(700.0, 800.0, REVEAL_MARGIN));
        assert!(has_entered_view(-50.0, 800.0, 0.0));
    }
}
