/*!
 * Property tests for segmentation and splitting
 */

use proptest::prelude::*;

use glossed::translation::{parse, process, split_word};
use glossed::TranslationTable;

use crate::common::greeting_table;

proptest! {
    #[test]
    fn prop_parse_shouldBeLossless(input in "\\PC*") {
        let parsed = parse(&input);
        prop_assert_eq!(parsed.collect_original(), input.clone());
        prop_assert_eq!(parsed.collect(), input);
    }

    #[test]
    fn prop_parse_adjacentSegmentsShouldAlternate(input in "[a-zA-Z0-9 _.é]{0,40}") {
        let parsed = parse(&input);
        for pair in parsed.segments().windows(2) {
            prop_assert_ne!(pair[0].is_word(), pair[1].is_word());
        }
    }

    #[test]
    fn prop_splitWord_shouldConcatenateToWord(word in "[a-zA-ZÁÉáé]{1,24}") {
        let units = split_word(&word);
        prop_assert!(!units.is_empty());
        prop_assert_eq!(units.concat(), word);
    }

    #[test]
    fn prop_process_emptyTable_shouldEchoInput(input in "\\PC*") {
        let outcome = process(&input, &TranslationTable::new());
        prop_assert_eq!(outcome.text, input);
    }

    #[test]
    fn prop_process_shouldOnlyChangeWords(input in "[a-zA-Z0-9 ,;()]{0,40}") {
        let outcome = process(&input, &greeting_table());
        let original = parse(&input);
        let translated = parse(&outcome.text);
        let fillers = |p: &glossed::translation::ParsedText| -> Vec<String> {
            p.segments().iter().filter(|s| !s.is_word()).map(|s| s.original().to_string()).collect()
        };
        prop_assert_eq!(fillers(&original), fillers(&translated));
    }
}
