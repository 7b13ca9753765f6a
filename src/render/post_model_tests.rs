//! Tests for post composition, hydration and projection.

use super::*;
use chrono::TimeZone;

// ===== Test Helpers =====

fn posted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 3, 4, 12, 30, 0).unwrap()
}

fn composed() -> PostRenderModel {
    let mut model = PostRenderModel::default();
    model
        .set_author("Rida F'kih", "@ridafkih")
        .set_avatar("https://example.com/rida.png")
        .set_caption("Say no to drugs!")
        .set_images(vec!["a.png".to_string(), "b.png".to_string()])
        .set_date(posted_at())
        .set_reactions(ReactionsUpdate::none().likes(12).comments(18));
    model
}

fn hydration_source() -> MarkupNode {
    MarkupNode::new(POST_TAG).with_child(
        MarkupNode::new("div")
            .with_class("post")
            .with_attr(POSTED_DATE_ATTR, "1614861000000")
            .with_child(MarkupNode::new("img").with_class("avatar").with_attr("src", "me.png"))
            .with_child(MarkupNode::new("span").with_class("full-name").with_text("Helcim Team"))
            .with_child(MarkupNode::new("span").with_class("handle").with_text("@helcim"))
            .with_child(
                MarkupNode::new("div")
                    .with_class("cover-container")
                    .with_child(MarkupNode::new("img").with_attr("src", "one.jpg")),
            )
            .with_child(MarkupNode::new("div").with_class("caption").with_text("Hello there"))
            .with_child(
                MarkupNode::new("div")
                    .with_class("action")
                    .with_class("likes")
                    .with_attr(COUNT_ATTR, "3"),
            )
            .with_child(
                MarkupNode::new("div")
                    .with_class("action")
                    .with_class("comments")
                    .with_attr(COUNT_ATTR, "4"),
            )
            .with_child(
                MarkupNode::new("div")
                    .with_class("action")
                    .with_class("shares")
                    .with_attr(COUNT_ATTR, "5"),
            ),
    )
}

// ===== Composition =====

#[test]
fn fluent_setters_populate_post() {
    let model = composed();
    let post = model.post();
    assert_eq!(post.author.full_name, "Rida F'kih");
    assert_eq!(post.author.handle, "@ridafkih");
    assert_eq!(post.caption, "Say no to drugs!");
    assert_eq!(post.images.len(), 2);
    assert_eq!(post.posted_at, posted_at());
    assert_eq!(
        post.reactions,
        Reactions {
            likes: 12,
            comments: 18,
            shares: 0
        }
    );
}

#[test]
fn set_avatar_keeps_existing_avatar() {
    let mut model = composed();
    model.set_avatar("https://example.com/other.png");
    assert_eq!(
        model.post().author.avatar_url.as_deref(),
        Some("https://example.com/rida.png")
    );
}

#[test]
fn set_images_ignores_empty_list() {
    let mut model = composed();
    model.set_images(Vec::new());
    assert_eq!(model.post().images, vec!["a.png", "b.png"]);
}

#[test]
fn partial_reactions_update_leaves_other_counters() {
    let mut model = composed();
    model.set_reactions(ReactionsUpdate::none().likes(40));
    assert_eq!(model.post().reactions.likes, 40);
    assert_eq!(model.post().reactions.comments, 18);
}

// ===== Interaction =====

#[test]
fn toggle_like_round_trips_count() {
    let mut model = PostRenderModel::default();
    model.set_reactions(ReactionsUpdate::none().likes(5));

    model.toggle_like();
    assert_eq!(model.post().reactions.likes, 6);
    model.toggle_like();
    assert_eq!(model.post().reactions.likes, 5);
    assert!(!model.post().liked);
}

#[test]
fn toggle_like_updates_mounted_projection() {
    let mut model = composed();
    model.mount();
    model.toggle_like();

    let likes = model.projection().unwrap().select(".action.likes").unwrap();
    assert!(likes.has_class("liked"));
    assert_eq!(likes.attr(COUNT_ATTR), Some("13"));
}

#[test]
fn toggle_caption_ignores_short_caption() {
    let mut model = composed();
    assert!(model.toggle_caption());
    assert!(model.caption_collapsed());
}

#[test]
fn toggle_caption_expands_long_caption() {
    let mut model = PostRenderModel::default();
    model.set_caption("x".repeat(300));
    model.mount();

    assert!(!model.toggle_caption());
    let caption = model.projection().unwrap().select(".caption").unwrap();
    assert!(caption.has_class("collapsable"));
    assert!(!caption.has_class("collapsed"));
}

#[test]
fn scroll_carousel_moves_active_indicator() {
    let mut model = composed();
    model.mount();
    assert_eq!(model.scroll_carousel(320.0, 300.0), 1);

    let indicators = model.projection().unwrap().select_all(".indicator");
    assert_eq!(indicators.len(), 2);
    assert!(!indicators[0].has_class("active"));
    assert!(indicators[1].has_class("active"));
}

// ===== Projection =====

#[test]
fn render_projects_fields_into_known_regions() {
    let node = composed().render();
    assert_eq!(node.tag, POST_TAG);
    assert_eq!(node.select(".full-name").unwrap().text_content(), "Rida F'kih");
    assert_eq!(node.select(".handle").unwrap().text_content(), "@ridafkih");
    assert_eq!(node.select(".date").unwrap().text_content(), "Mar 4, 2021");
    assert_eq!(
        node.select(".post").unwrap().attr(POSTED_DATE_ATTR),
        Some(posted_at().timestamp_millis().to_string().as_str())
    );
    assert_eq!(node.select_all(".cover-container img").len(), 2);
    assert_eq!(node.select(".action.comments").unwrap().attr(COUNT_ATTR), Some("18"));
    assert!(!node.has_class("user-posted"));
}

#[test]
fn render_splits_collapsible_caption() {
    let mut model = PostRenderModel::default();
    model.set_caption(format!("{}{}", "a".repeat(240), "b".repeat(10)));
    let caption = model.render();
    let caption = caption.select(".caption").unwrap();

    assert!(caption.has_class("collapsed"));
    assert_eq!(caption.select(".preview").unwrap().text_content(), "a".repeat(240));
    assert_eq!(caption.select(".ellipses").unwrap().text_content(), "...");
    assert_eq!(caption.select(".hidden").unwrap().text_content(), "b".repeat(10));
}

#[test]
fn user_posted_marks_projection() {
    let mut model = composed();
    model.set_user_posted();
    assert!(model.render().has_class("user-posted"));
}

#[test]
fn mount_is_explicit() {
    let mut model = composed();
    assert!(!model.is_rendered());
    model.mount();
    assert!(model.is_rendered());
}

// ===== Hydration =====

#[test]
fn import_reads_every_region() {
    let mut model = PostRenderModel::default();
    let warnings = model.import_from_node(&hydration_source());
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    let post = model.post();
    assert_eq!(post.author.full_name, "Helcim Team");
    assert_eq!(post.author.handle, "@helcim");
    assert_eq!(post.author.avatar_url.as_deref(), Some("me.png"));
    assert_eq!(post.posted_at.timestamp_millis(), 1_614_861_000_000);
    assert_eq!(post.images, vec!["one.jpg"]);
    assert_eq!(post.caption, "Hello there");
    assert_eq!(
        post.reactions,
        Reactions {
            likes: 3,
            comments: 4,
            shares: 5
        }
    );
}

#[test]
fn from_node_hydrates_on_mount() {
    let mut model = PostRenderModel::from_node(hydration_source(), CaptionConfig::default());
    assert_eq!(model.post().caption, "");
    model.mount();
    assert_eq!(model.post().caption, "Hello there");
}

#[test]
fn import_then_render_round_trips_visible_fields() {
    let mut original = composed();
    original.set_caption(format!("{}\n{}", "long ".repeat(60), "tail"));
    original.toggle_like();
    let rendered = original.render();

    let mut hydrated = PostRenderModel::default();
    let warnings = hydrated.import_from_node(&rendered);
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    let (a, b) = (original.post(), hydrated.post());
    assert_eq!(b.author, a.author);
    assert_eq!(b.caption, a.caption);
    assert_eq!(b.reactions, a.reactions);
    assert_eq!(b.images, a.images);
    assert_eq!(b.liked, a.liked);
    assert_eq!(b.posted_at, a.posted_at);
}

#[test]
fn malformed_numbers_coerce_to_defaults() {
    let source = MarkupNode::new(POST_TAG).with_child(
        MarkupNode::new("div")
            .with_class("post")
            .with_attr(POSTED_DATE_ATTR, "yesterday")
            .with_child(
                MarkupNode::new("div")
                    .with_class("action")
                    .with_class("likes")
                    .with_attr(COUNT_ATTR, "lots"),
            ),
    );

    let before = Utc::now();
    let mut model = PostRenderModel::default();
    let warnings = model.import_from_node(&source);

    assert_eq!(model.post().reactions.likes, 0);
    assert!(model.post().posted_at >= before);
    assert!(warnings.contains(&RenderWarning::malformed(
        ".post",
        POSTED_DATE_ATTR,
        "yesterday"
    )));
    assert!(warnings.contains(&RenderWarning::malformed(".action.likes", COUNT_ATTR, "lots")));
}

#[test]
fn missing_regions_degrade_to_empty_post() {
    let mut model = PostRenderModel::default();
    let warnings = model.import_from_node(&MarkupNode::new(POST_TAG));

    assert_eq!(model.post().caption, "");
    assert_eq!(model.post().reactions, Reactions::default());
    assert!(warnings.contains(&RenderWarning::missing(".caption")));
    assert!(warnings.contains(&RenderWarning::missing(".full-name")));
    assert!(warnings.contains(&RenderWarning::missing(".action.shares")));
}

#[test]
fn missing_count_attribute_is_zero_without_warning() {
    let source = MarkupNode::new(POST_TAG).with_child(
        MarkupNode::new("div")
            .with_class("action")
            .with_class("likes"),
    );
    let mut model = PostRenderModel::default();
    let warnings = model.import_from_node(&source);
    assert_eq!(model.post().reactions.likes, 0);
    assert!(!warnings
        .iter()
        .any(|w| matches!(w, RenderWarning::MalformedNumericAttribute { selector, .. } if selector == ".action.likes")));
}
