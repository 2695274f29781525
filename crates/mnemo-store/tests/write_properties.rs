use proptest::prelude::*;

use mnemo_store::MemoryStore;

proptest! {
    /// The contamination guard holds for any input: text ending in `?`
    /// never creates a record.
    #[test]
    fn interrogative_text_never_creates_a_record(text in ".{0,60}") {
        let mut store = MemoryStore::with_defaults();
        let input = format!("{text}?");
        prop_assert!(store.write(&input, None, None).is_err());
        prop_assert_eq!(store.len(), 0);
    }

    /// Written content comes back whitespace-normalized, with importance
    /// clamped to the unit interval.
    #[test]
    fn written_record_is_normalized_and_clamped(
        // ASCII words only: random Hangul can hit an interrogative token.
        content in "[a-z]{1,20}( [a-z]{1,20}){0,4}",
        importance in -2.0f64..3.0,
    ) {
        let mut store = MemoryStore::with_defaults();
        let id = store.write(&content, None, Some(importance)).unwrap();
        let record = store.get(&id).unwrap();
        prop_assert_eq!(&record.content, &content);
        prop_assert!((0.0..=1.0).contains(&record.importance.value()));
    }
}
