//! Concrete segmentation scenarios.
//!
//! Fixed inputs with hand-checked expected slides, including the
//! constraint errors and deck bookkeeping around them.

use promptdeck::{
    segment, Constraints, DeckPlan, Error, ParagraphPolicy, Segmentation, Segmenter,
    SentenceSplitter, SimilarityGate,
};

fn texts(result: &Segmentation) -> Vec<&str> {
    result.iter().map(|u| u.text.as_str()).collect()
}

fn flags(result: &Segmentation) -> Vec<bool> {
    result.iter().map(|u| u.needs_review).collect()
}

// =============================================================================
// Packing: max_lines = 2, max_chars = 10
// =============================================================================

#[test]
fn second_sentence_starts_new_slide() {
    let result = segment("Hi there. This is a test.", 2, 10, None).unwrap();

    assert_eq!(texts(&result), vec!["Hi there.", "This is a test."]);
    assert_eq!(flags(&result), vec![false, false]);
    assert_eq!(result.units()[0].lines, 1);
    assert_eq!(result.units()[1].lines, 2);
}

#[test]
fn empty_string_gives_no_units() {
    let result = segment("", 2, 10, None).unwrap();
    assert!(result.is_empty());
}

#[test]
fn fifty_char_word_is_cut_into_chunks() {
    let word = "abcdefghijklmnopqrstuvwxy".repeat(2);
    assert_eq!(word.len(), 50);

    let result = segment(&word, 2, 10, None).unwrap();

    // 5 chunks of 10, two per slide
    assert_eq!(result.len(), 3);
    assert_eq!(flags(&result), vec![true, true, true]);
    assert_eq!(result.units()[0].text, "abcdefghij\nklmnopqrst");
    assert_eq!(result.units()[2].text, "pqrstuvwxy");

    let rebuilt: String = result
        .iter()
        .flat_map(|u| u.text.split('\n'))
        .collect();
    assert_eq!(rebuilt, word);
}

#[test]
fn two_full_sentences_two_slides() {
    let result = segment("This is a test. That is a test.", 2, 10, None).unwrap();

    assert_eq!(texts(&result), vec!["This is a test.", "That is a test."]);
    assert_eq!(flags(&result), vec![false, false]);
}

#[test]
fn short_sentences_share_a_slide() {
    let result = segment("One. Two. Three.", 2, 10, None).unwrap();
    assert_eq!(texts(&result), vec!["One.\nTwo.", "Three."]);
}

// =============================================================================
// Forced splits
// =============================================================================

#[test]
fn long_sentence_split_at_clauses() {
    let text = "Welcome back everyone, today we cook rice, and then we eat it.";
    let result = segment(text, 2, 16, None).unwrap();

    assert_eq!(
        texts(&result),
        vec!["Welcome back everyone,", "today we cook rice,", "and then we eat it."]
    );
    assert!(result.iter().all(|u| u.needs_review && u.lines <= 2));
}

#[test]
fn forced_split_between_normal_slides() {
    let text = "Hello. One two three four five six seven eight. Bye.";
    let result = segment(text, 1, 12, None).unwrap();

    assert_eq!(result.units().first().map(|u| u.text.as_str()), Some("Hello."));
    assert_eq!(result.units().last().map(|u| u.text.as_str()), Some("Bye."));
    assert!(!result.units()[0].needs_review);
    assert!(!result.units()[result.len() - 1].needs_review);
    assert!(result.units()[1..result.len() - 1].iter().all(|u| u.needs_review));
}

#[test]
fn korean_script() {
    let text = "안녕하세요 여러분. 오늘은 김치찌개를 만들어 보겠습니다. 먼저 재료를 준비합니다.";
    let result = segment(text, 2, 12, None).unwrap();

    // 1 + 2 + 2 lines: every sentence gets its own slide
    assert_eq!(
        texts(&result),
        vec![
            "안녕하세요 여러분.",
            "오늘은 김치찌개를 만들어 보겠습니다.",
            "먼저 재료를 준비합니다."
        ]
    );
    assert_eq!(result.review_count(), 0);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn invalid_constraints_fail_fast() {
    assert!(matches!(
        segment("Hi.", 0, 10, None),
        Err(Error::InvalidMaxLines(0))
    ));
    assert!(matches!(
        segment("Hi.", 2, 0, None),
        Err(Error::InvalidMaxChars(0))
    ));
    // Even for empty input
    assert!(segment("", 0, 10, None).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_constraints_are_validated() {
    let zero = r#"{"max_lines_per_slide":0,"max_chars_per_line":0}"#;
    assert!(serde_json::from_str::<Constraints>(zero).is_err());

    let ok = r#"{"max_lines_per_slide":1,"max_chars_per_line":10}"#;
    let constraints: Constraints = serde_json::from_str(ok).unwrap();
    let result = Segmenter::new(constraints)
        .segment("supercalifragilistic")
        .unwrap();
    assert_eq!(texts(&result), vec!["supercalif", "ragilistic"]);
    assert!(result.iter().all(|u| u.needs_review));
}

#[test]
fn paragraph_policy() {
    let text = "First point.\nSecond point.";
    let constraints = Constraints::new(4, 20).unwrap();

    let soft = Segmenter::new(constraints).segment(text).unwrap();
    assert_eq!(texts(&soft), vec!["First point.\nSecond point."]);

    let hard = Segmenter::new(constraints)
        .with_paragraphs(ParagraphPolicy::SlideBreak)
        .segment(text)
        .unwrap();
    assert_eq!(texts(&hard), vec!["First point.", "Second point."]);
}

#[test]
fn naive_splitter_breaks_abbreviations() {
    let text = "Dr. Kim is here.";
    let constraints = Constraints::new(1, 20).unwrap();

    let aware = Segmenter::new(constraints).segment(text).unwrap();
    assert_eq!(texts(&aware), vec!["Dr. Kim is here."]);

    let naive = Segmenter::new(constraints)
        .with_splitter(SentenceSplitter::new().with_abbreviations(&[]))
        .segment(text)
        .unwrap();
    assert_eq!(texts(&naive), vec!["Dr.", "Kim is here."]);
}

#[test]
fn similarity_gate_separates_topics() {
    struct Topic;

    impl promptdeck::Embedder for Topic {
        fn embed(&self, texts: &[&str]) -> promptdeck::Result<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|t| {
                    if t.contains("rice") {
                        vec![1.0, 0.1]
                    } else {
                        vec![0.1, 1.0]
                    }
                })
                .collect())
        }
    }

    let text = "Wash the rice. Cook the rice. Now the weather. It is sunny.";
    let segmenter = Segmenter::new(Constraints::new(10, 30).unwrap())
        .with_gate(SimilarityGate::new(Topic).with_threshold(0.85).unwrap());
    let result = segmenter.segment(text).unwrap();

    assert_eq!(
        texts(&result),
        vec!["Wash the rice.\nCook the rice.", "Now the weather.\nIt is sunny."]
    );
}

// =============================================================================
// Deck plan
// =============================================================================

#[test]
fn deck_numbers_and_markers() {
    let text = "Hi. Supercalifragilistic. Bye.";
    let result = segment(text, 1, 10, None).unwrap();
    let deck = DeckPlan::assemble(&result, 10).unwrap();

    assert_eq!(deck.len(), result.len());
    for (i, (slide, unit)) in deck.slides().iter().zip(&result).enumerate() {
        assert_eq!(slide.number, i + 1);
        assert_eq!(slide.total, deck.len());
        assert_eq!(slide.needs_review, unit.needs_review);
        assert_eq!(slide.review_label().is_some(), unit.needs_review);
        assert_eq!(slide.is_last, i + 1 == deck.len());
    }
}
