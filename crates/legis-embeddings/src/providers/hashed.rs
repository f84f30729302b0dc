//! Deterministic offline embedding fallback.
//!
//! Hashes character bigrams into a fixed-dimension bag-of-features vector.
//! Bill keywords are short and often CJK, so bigrams carry more signal than
//! whitespace tokens. Not semantically rich, but always available and
//! reproducible, which keeps the rest of the pipeline testable offline.

use legis_core::errors::LegisResult;
use legis_core::traits::IEmbeddingProvider;

/// Hashed bigram embedding provider.
pub struct HashedProvider {
    dimensions: usize,
}

impl HashedProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a over a pair of chars, mapped into a bucket index.
    fn bucket(a: char, b: char, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        let mut buf = [0u8; 8];
        for byte in a.encode_utf8(&mut buf[..4]).as_bytes() {
            h ^= *byte as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        for byte in b.encode_utf8(&mut buf[4..]).as_bytes() {
            h ^= *byte as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];

        let chars: Vec<char> = text
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(|c| c.to_lowercase())
            .collect();

        if chars.len() < 2 {
            return vec;
        }

        for pair in chars.windows(2) {
            vec[Self::bucket(pair[0], pair[1], self.dimensions)] += 1.0;
        }

        // L2 normalize so cosine similarity behaves.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl IEmbeddingProvider for HashedProvider {
    fn embed(&self, text: &str) -> LegisResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-bigram"
    }

    fn is_available(&self) -> bool {
        true
    }
}
