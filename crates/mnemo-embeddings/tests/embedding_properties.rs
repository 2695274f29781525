use mnemo_core::traits::IEmbeddingProvider;
use mnemo_embeddings::{cosine_similarity, HashingEmbedder};
use proptest::prelude::*;

proptest! {
    /// Every non-degenerate embedding is unit length; degenerate inputs
    /// (no alphanumeric tokens) embed to the zero vector.
    #[test]
    fn embeddings_are_unit_or_zero(text in ".{0,120}") {
        let p = HashingEmbedder::default();
        let v = p.embed(&text).unwrap();
        prop_assert_eq!(v.len(), p.dimensions());
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!(norm < 1e-6 || (norm - 1.0).abs() < 1e-4);
    }

    /// Self-similarity is 1 for any text that produces a non-zero vector.
    #[test]
    fn self_similarity_is_one(text in "[a-z가-힣 ]{1,60}") {
        let p = HashingEmbedder::default();
        let v = p.embed(&text).unwrap();
        if v.iter().any(|&x| x != 0.0) {
            prop_assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
        }
    }
}
