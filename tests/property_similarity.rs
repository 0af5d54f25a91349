//! Property-based tests for cosine similarity invariants
//!
//! Tests the following properties:
//! 1. Symmetry: similarity(A, B) == similarity(B, A)
//! 2. Bounds: similarity ∈ [-1, 1] and always finite
//! 3. Identity: similarity(A, A) ≈ 1
//! 4. Opposition: similarity(A, -A) ≈ -1
//! 5. Scale invariance: positive scaling never changes the score
//! 6. Mismatched dimensions score exactly 0
//! 7. Zero vectors score exactly 0
//!
//! These invariants back the router's argmax selection: scores must stay
//! comparable across registry entries regardless of embedding magnitude.

use adjutant::domain::models::cosine_similarity;
use proptest::prelude::*;

/// Generate embedding vectors with bounded components
fn embedding_strategy(dims: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0f32, dims..=dims)
}

/// Generate embeddings with an anchored first component so the norm stays
/// well away from zero
fn anchored_embedding_strategy(dims: usize) -> impl Strategy<Value = Vec<f32>> {
    (
        prop::collection::vec(-1.0f32..1.0f32, dims..=dims),
        0.25f32..1.0f32,
    )
        .prop_map(|(mut vec, anchor)| {
            vec[0] = anchor;
            vec
        })
}

proptest! {
    /// Property 1: Symmetry - similarity(A, B) == similarity(B, A)
    #[test]
    fn proptest_similarity_is_symmetric(
        a in embedding_strategy(32),
        b in embedding_strategy(32)
    ) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);

        prop_assert!(
            (ab - ba).abs() < 1e-12,
            "Similarity should be symmetric: sim(A,B)={} != sim(B,A)={}",
            ab,
            ba
        );
    }

    /// Property 2: Bounds - similarity is always finite and within [-1, 1]
    #[test]
    fn proptest_similarity_within_unit_bounds(
        a in embedding_strategy(32),
        b in embedding_strategy(32)
    ) {
        let score = cosine_similarity(&a, &b);

        prop_assert!(score.is_finite(), "Similarity should be finite, got {}", score);
        prop_assert!(
            (-1.0 - 1e-9..=1.0 + 1e-9).contains(&score),
            "Similarity should be in [-1, 1], got {}",
            score
        );
    }

    /// Property 3: Identity - a vector compared with itself scores ~1
    #[test]
    fn proptest_identical_vectors_score_one(a in anchored_embedding_strategy(32)) {
        let score = cosine_similarity(&a, &a);

        prop_assert!(
            (score - 1.0).abs() < 1e-9,
            "Identical vectors should score ~1, got {}",
            score
        );
    }

    /// Property 4: Opposition - a vector compared with its negation scores ~-1
    #[test]
    fn proptest_opposite_vector_scores_negative_one(a in anchored_embedding_strategy(32)) {
        let negated: Vec<f32> = a.iter().map(|x| -x).collect();
        let score = cosine_similarity(&a, &negated);

        prop_assert!(
            (score + 1.0).abs() < 1e-9,
            "Opposite vectors should score ~-1, got {}",
            score
        );
    }

    /// Property 5: Scale invariance - positive scaling never changes the score
    #[test]
    fn proptest_positive_scaling_preserves_similarity(
        a in anchored_embedding_strategy(32),
        b in anchored_embedding_strategy(32),
        exp in -2i32..6i32
    ) {
        let scale = 2.0f32.powi(exp);
        let scaled: Vec<f32> = a.iter().map(|x| x * scale).collect();

        let base = cosine_similarity(&a, &b);
        let after = cosine_similarity(&scaled, &b);

        prop_assert!(
            (after - base).abs() < 1e-9,
            "Scaling by {} changed the score: {} vs {}",
            scale,
            base,
            after
        );
    }

    /// Property 6: Mismatched dimensions score exactly 0 in both directions
    #[test]
    fn proptest_mismatched_dimensions_score_zero(
        a in embedding_strategy(8),
        b in prop::collection::vec(-1.0f32..1.0f32, 9usize..16)
    ) {
        prop_assert!(
            cosine_similarity(&a, &b).abs() < f64::EPSILON,
            "Mismatched dimensions should score 0"
        );
        prop_assert!(
            cosine_similarity(&b, &a).abs() < f64::EPSILON,
            "Mismatched dimensions should score 0 in the reverse direction"
        );
    }

    /// Property 7: Zero vectors score exactly 0 against anything
    #[test]
    fn proptest_zero_vector_scores_zero(b in embedding_strategy(16)) {
        let zero = vec![0.0f32; 16];

        prop_assert!(
            cosine_similarity(&zero, &b).abs() < f64::EPSILON,
            "A zero vector should score 0"
        );
        prop_assert!(
            cosine_similarity(&b, &zero).abs() < f64::EPSILON,
            "A zero vector should score 0 in the reverse direction"
        );
    }
}
