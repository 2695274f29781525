//! Feature-hashing embedding provider.
//!
//! Hashes word tokens plus character n-gram features into fixed-dimension
//! buckets with sign hashing, then L2-normalizes. The character features
//! matter for agglutinative scripts: "빨간색" and "색이야" share no word
//! token but overlap on the character level.

use mnemo_core::constants::EMBEDDING_DIMENSIONS;
use mnemo_core::errors::MnemoResult;
use mnemo_core::traits::IEmbeddingProvider;

/// Deterministic feature-hashing embedder.
pub struct HashingEmbedder {
    dimensions: usize,
}

/// Relative weights for the three feature classes.
const WORD_WEIGHT: f32 = 1.0;
const BIGRAM_WEIGHT: f32 = 0.5;
const CHAR_WEIGHT: f32 = 0.25;

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a feature with FNV-1a. The low bits pick the bucket; one high
    /// bit picks the sign, which keeps unrelated features from piling up
    /// in the same direction.
    fn hash_feature(feature: &str) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in feature.as_bytes() {
            h ^= u64::from(*b);
            h = h.wrapping_mul(0x100000001b3);
        }
        h
    }

    fn accumulate(&self, vec: &mut [f32], feature: &str, weight: f32) {
        let h = Self::hash_feature(feature);
        let bucket = (h as usize) % self.dimensions;
        let sign = if h & (1 << 63) == 0 { 1.0 } else { -1.0 };
        vec[bucket] += sign * weight;
    }

    /// Tokenize into lowercase alphanumeric word tokens.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn feature_vector(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec;
        }

        for token in &tokens {
            self.accumulate(&mut vec, token, WORD_WEIGHT);

            let chars: Vec<char> = token.chars().collect();
            if chars.len() < 2 {
                continue;
            }
            for window in chars.windows(2) {
                let bigram: String = window.iter().collect();
                self.accumulate(&mut vec, &bigram, BIGRAM_WEIGHT);
            }
            for c in &chars {
                // Single-character features only help for multi-byte
                // scripts; for ASCII they are pure noise.
                if c.len_utf8() > 1 {
                    let mut buf = [0u8; 4];
                    self.accumulate(&mut vec, c.encode_utf8(&mut buf), CHAR_WEIGHT);
                }
            }
        }

        // L2 normalize.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(EMBEDDING_DIMENSIONS)
    }
}

impl IEmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> MnemoResult<Vec<f32>> {
        Ok(self.feature_vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "feature-hashing"
    }
}
