//! Snapshot tests for raku-core using insta
//!
//! These pin the exact text produced for page metadata, listing rows and
//! speech so wording changes show up in review.

use raku_core::text::{excerpt_of, plain_title_of, speech_text_of};
use raku_core::validate::validate_catalog;
use raku_core::{Catalog, Quiz, ReaderConfig, Story};

fn sample_story() -> Story {
    let mut story = Story::new(
        "momotaro",
        "<ruby>桃<rt>もも</rt></ruby><ruby>太郎<rt>たろう</rt></ruby>",
        "Level 4",
        "<p><ruby>昔<rt>むかし</rt></ruby>、<ruby>川<rt>かわ</rt></ruby>で&nbsp;\
         おばあさんが<br>せんたくを していました。</p><p>&quot;大きな もも！&quot;</p>",
    );
    story.lesson = Some("L7".to_string());
    story
}

#[test]
fn test_speech_text_snapshot() {
    insta::assert_snapshot!(
        speech_text_of(&sample_story().story_html.unwrap_or_default()),
        @r#"むかし、かわで おばあさんが せんたくを していました。 "大きな もも！""#
    );
}

#[test]
fn test_excerpt_snapshot() {
    insta::assert_snapshot!(excerpt_of(&sample_story(), 12), @"昔、川で おばあさんがせ...");
}

#[test]
fn test_page_title_snapshot() {
    let catalog = Catalog::new(vec![sample_story()], &ReaderConfig::default());
    insta::assert_snapshot!(catalog.page_meta("momotaro").title, @"桃太郎 | Japanese Stories");
    insta::assert_snapshot!(plain_title_of("&quot;<b>桃</b>&quot;"), @r#""桃""#);
}

#[test]
fn test_card_json_snapshot() {
    let catalog = Catalog::new(vec![sample_story()], &ReaderConfig::default());
    let card = catalog.card(catalog.get("momotaro").unwrap());
    let json = serde_json::to_string(&(&card.level, card.badge, card.lesson, card.ordinal)).unwrap();
    insta::assert_snapshot!(json, @r##"["Level 4",{"name":"botan","hex":"#D81B60"},"L7",1]"##);
}

#[test]
fn test_validation_messages_snapshot() {
    let mut story = Story::new("bad", "t", "Level 1", "x")
        .with_quizzes(vec![Quiz::new("q", vec!["a".into(), "b".into()], 2)]);
    story.story_html = Some(String::new());

    let catalog = Catalog::new(vec![story], &ReaderConfig::default());
    let messages: Vec<String> = validate_catalog(&catalog)
        .iter()
        .map(|issue| issue.problem.to_string())
        .collect();
    insta::assert_snapshot!(
        messages.join(" / "),
        @"Story bad has no body text / Quiz 0 of story bad points at choice 2 but has 2 choices"
    );
}
