//! Property tests for level ordering and text normalization

use proptest::prelude::*;
use raku_core::level::{difficulty_score, LevelParser};
use raku_core::text::{excerpt_of, speech_text_of, ELLIPSIS};
use raku_core::{CanonicalLevel, Catalog, RawLevel, ReaderConfig, Story};

fn raw_level() -> impl Strategy<Value = RawLevel> {
    prop_oneof![
        (-5i64..40).prop_map(RawLevel::Number),
        (1u32..40).prop_map(|n| RawLevel::Text(format!("Level {}", n))),
        (1u8..=5).prop_map(|n| RawLevel::Text(format!("N{}", n))),
        "[A-Za-z ]{1,8}".prop_map(RawLevel::Text),
    ]
}

/// Markup-ish text: tags, furigana, entities and stray brackets
fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[あ-んア-ン漢字猫犬 a-z]{0,6}",
            prop::sample::select(vec![
                "<ruby>", "</ruby>", "<rt>", "</rt>", "<rp>(</rp>", "<p>", "</p>", "<br/>",
                "&nbsp;", "&quot;", "&amp;", "<", ">", "\n",
            ])
            .prop_map(str::to_string),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn numeric_scores_are_monotonic(a in 1u32..10_000, b in 1u32..10_000) {
        prop_assume!(a < b);
        prop_assert!(
            difficulty_score(&CanonicalLevel::Numeric(a)) < difficulty_score(&CanonicalLevel::Numeric(b))
        );
    }

    #[test]
    fn jlpt_sorts_after_every_textbook_level(n in any::<u32>(), jlpt in 1u8..=5) {
        prop_assert!(
            difficulty_score(&CanonicalLevel::Numeric(n)) < difficulty_score(&CanonicalLevel::Jlpt(jlpt))
        );
    }

    #[test]
    fn sort_is_stable_and_ordered(levels in prop::collection::vec(raw_level(), 0..30)) {
        let stories: Vec<Story> = levels
            .into_iter()
            .enumerate()
            .map(|(i, level)| Story::new(i.to_string(), "t", level, "x"))
            .collect();
        let catalog = Catalog::new(stories, &ReaderConfig::default());
        let sorted = catalog.sort_by_difficulty(catalog.stories().iter().collect());

        prop_assert_eq!(sorted.len(), catalog.len());
        for pair in sorted.windows(2) {
            let (a, b) = (catalog.level_of(pair[0]), catalog.level_of(pair[1]));
            prop_assert!(a.difficulty_score() <= b.difficulty_score());
            if a.difficulty_score() == b.difficulty_score() {
                let ia: usize = pair[0].id.parse().unwrap();
                let ib: usize = pair[1].id.parse().unwrap();
                prop_assert!(ia < ib);
            }
        }
    }

    #[test]
    fn numbers_and_labels_agree(n in 1i64..1000) {
        let parser = LevelParser::default();
        prop_assert_eq!(
            parser.normalize(&RawLevel::Number(n)),
            parser.normalize(&RawLevel::Text(format!("Level {}", n)))
        );
    }

    #[test]
    fn speech_text_has_no_brackets(html in markup()) {
        let text = speech_text_of(&html);
        prop_assert!(!text.contains('<') && !text.contains('>'));
    }

    #[test]
    fn speech_text_is_idempotent(html in markup()) {
        let once = speech_text_of(&html);
        prop_assert_eq!(speech_text_of(&once), once);
    }

    #[test]
    fn excerpt_is_bounded(html in markup(), max_len in 0usize..40) {
        let story = Story::new("s", "t", 1i64, html);
        let excerpt = excerpt_of(&story, max_len);
        prop_assert!(excerpt.chars().count() <= max_len + ELLIPSIS.chars().count());
    }
}
