//! In-page link that smooth-scrolls instead of jumping.

use leptos::prelude::*;

use crate::util::scroll::scroll_to_anchor;

/// Anchor for `#id` targets.
///
/// `on_follow` runs after every click, e.g. to close the mobile menu.
#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_follow: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if scroll_to_anchor(href) {
            ev.prevent_default();
        }
        if let Some(cb) = on_follow {
            cb.run(());
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
