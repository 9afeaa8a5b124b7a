use content::{Navigator, Scroller};
use leptos::prelude::RwSignal;

/// Navigation state shared by the nav bar and the hero buttons.
pub type Navigation = RwSignal<Navigator<DomScroller>>;

pub fn navigation() -> Navigation {
    RwSignal::new(Navigator::new(DomScroller))
}

/// Smoothly scrolls the document to the element with the given id.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomScroller;

impl Scroller for DomScroller {
    fn scroll_into_view(&mut self, anchor: &str) {
        cfg_if::cfg_if! {
            if #[cfg(feature = "hydrate")] {
                let Some(element) = leptos::prelude::document().get_element_by_id(anchor) else {
                    log::warn!("No element with id `{}' to scroll to", anchor);
                    return;
                };
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            } else {
                // Nothing to scroll when rendering on the server.
                log::debug!("ignoring scroll to `{}'", anchor);
            }
        }
    }
}
