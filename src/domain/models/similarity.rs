//! Embedding similarity math.

/// Calculate cosine similarity between two embedding vectors.
///
/// Accumulates in f64 over the f32 components for stable scores on
/// high-dimensional vectors. Mismatched lengths and zero-magnitude vectors
/// score 0.0 instead of erroring, so a single bad vector never aborts a
/// registry scan.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    let norm_a: f64 = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
