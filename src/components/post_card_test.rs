use super::*;

fn sample() -> Post {
    Post {
        user_id: 5,
        username: "ann".to_owned(),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        contents: Some("hello <b>world</b>".to_owned()),
    }
}

// =============================================================
// PostFragment
// =============================================================

#[test]
fn fragment_links_author_profile_by_id() {
    let fragment = PostFragment::from_post(&sample());
    assert_eq!(fragment.profile_href, "profile.html?id=5");
    assert!(fragment.profile_href.contains("id=5"));
    assert_eq!(fragment.author_label, "ann");
}

#[test]
fn fragment_keeps_markup_as_literal_text() {
    let fragment = PostFragment::from_post(&sample());
    assert_eq!(fragment.body_text, "hello <b>world</b>");
}

#[test]
fn fragment_with_missing_contents_has_empty_body() {
    let post = Post { contents: None, ..sample() };
    let fragment = PostFragment::from_post(&post);
    assert_eq!(fragment.body_text, "");
    assert_eq!(fragment.author_label, "ann");
}

#[test]
fn fragment_is_repeatable() {
    assert_eq!(PostFragment::from_post(&sample()), PostFragment::from_post(&sample()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fragment_formats_timestamp() {
    let fragment = PostFragment::from_post(&sample());
    assert_eq!(fragment.timestamp_label, "2024-01-01 00:00:00 UTC");

    let post = Post { created_at: "not a date".to_owned(), ..sample() };
    assert_eq!(PostFragment::from_post(&post).timestamp_label, "Invalid Date");
}

// =============================================================
// PostCard (server rendering)
// =============================================================

#[cfg(feature = "ssr")]
#[test]
fn post_card_renders_body_as_escaped_text() {
    let html = view! { <PostCard post=sample()/> }.to_html();
    assert!(html.contains(r#"href="profile.html?id=5""#));
    assert!(html.contains(">ann<"));
    assert!(html.contains("hello &lt;b"));
    assert!(!html.contains("<b>world</b>"));
    assert!(html.contains("<hr"));
}

#[cfg(feature = "ssr")]
#[test]
fn post_card_renders_link_time_body_rule_in_order() {
    let html = view! { <PostCard post=sample()/> }.to_html();
    let positions: Vec<usize> = ["<a", "<small", "<p", "<hr"]
        .iter()
        .map(|tag| html.find(tag).unwrap_or_else(|| panic!("{tag} missing in {html}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order: {html}");
}

#[cfg(feature = "ssr")]
#[test]
fn post_card_without_contents_renders_empty_body() {
    let post = Post { contents: None, ..sample() };
    let html = view! { <PostCard post=post/> }.to_html();
    let open = r#"<p class="post__body">"#;
    let start = html.find(open).expect("body paragraph") + open.len();
    let end = start + html[start..].find("</p>").expect("closed paragraph");
    assert_eq!(html[start..end].replace("<!>", ""), "");
    assert!(html.contains("<hr"));
}
