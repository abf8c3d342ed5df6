//! Rendering of a single feed post.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts come from the feed listing and are inserted into the page by the
//! caller. Rendering is a pure function of the post: no network, no stored
//! state.
//!
//! DESIGN
//! ======
//! `PostFragment` is the structural model both render paths share. The
//! Leptos component and the raw DOM builder only ever insert its strings as
//! text nodes, so post content can never be parsed as markup.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::net::types::Post;
use crate::util::time::format_timestamp;

/// Author profile page; the author is selected by `id` query parameter.
pub const PROFILE_PAGE: &str = "profile.html";

/// Display-ready pieces of a post, in render order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostFragment {
    pub profile_href: String,
    pub author_label: String,
    pub timestamp_label: String,
    pub body_text: String,
}

impl PostFragment {
    pub fn from_post(post: &Post) -> Self {
        Self {
            profile_href: profile_href(post.user_id),
            author_label: post.username.clone(),
            timestamp_label: format_timestamp(&post.created_at),
            body_text: post.contents.clone().unwrap_or_default(),
        }
    }
}

pub fn profile_href(user_id: i64) -> String {
    format!("{PROFILE_PAGE}?id={user_id}")
}

/// Author link, timestamp, body text, and a trailing separator.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let PostFragment { profile_href, author_label, timestamp_label, body_text } =
        PostFragment::from_post(&post);

    view! {
        <>
            <a class="post__author" href=profile_href>{author_label}</a>
            <small class="post__time">{timestamp_label}</small>
            <p class="post__body">{body_text}</p>
            <hr/>
        </>
    }
}

/// Build the post directly with the DOM API, for callers outside Leptos.
///
/// # Errors
///
/// Returns the DOM exception if an element cannot be created or appended.
#[cfg(feature = "hydrate")]
pub fn render_post(
    document: &web_sys::Document,
    post: &Post,
) -> Result<web_sys::DocumentFragment, wasm_bindgen::JsValue> {
    let fragment = PostFragment::from_post(post);
    let root = document.create_document_fragment();

    let link = document.create_element("a")?;
    link.set_attribute("class", "post__author")?;
    link.set_attribute("href", &fragment.profile_href)?;
    link.set_text_content(Some(&fragment.author_label));

    let time = document.create_element("small")?;
    time.set_attribute("class", "post__time")?;
    time.set_text_content(Some(&fragment.timestamp_label));

    let body = document.create_element("p")?;
    body.set_attribute("class", "post__body")?;
    body.set_text_content(Some(&fragment.body_text));

    let rule = document.create_element("hr")?;

    for node in [&link, &time, &body, &rule] {
        root.append_child(node)?;
    }
    Ok(root)
}
