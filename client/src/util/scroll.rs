//! In-page anchor navigation with smooth scrolling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id targeted by an in-page `href`, if it is one.
///
/// Only `#id` forms qualify; a bare `#` or an external link yields `None`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Smooth-scroll the element named by `href` to the top of the viewport.
///
/// Returns `true` when `href` was an in-page anchor, so the caller can
/// suppress default navigation. An unknown id scrolls nowhere.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return href.starts_with('#');
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
        else {
            log::debug!("anchor target #{id} not found");
            return true;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
    true
}
