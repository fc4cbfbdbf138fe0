//! Vector operations on embedding vectors.

/// Utility struct for vector operations.
pub struct VectorOps;

impl VectorOps {
    /// Euclidean (L2) norm.
    pub fn l2_norm(vector: &[f64]) -> f64 {
        vector.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Compute dot product between two vectors.
    pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
        if a.len() != b.len() {
            return 0.0;
        }
        a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
    }

    /// Compute cosine similarity between two vectors.
    pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }

        let norm_a = Self::l2_norm(a);
        let norm_b = Self::l2_norm(b);

        if norm_a == 0.0 || norm_b == 0.0 {
            0.0
        } else {
            Self::dot_product(a, b) / (norm_a * norm_b)
        }
    }

    /// Normalize a vector in-place to unit length.
    ///
    /// A zero vector is divided by 1.0 and so stays zero.
    pub fn normalize_inplace(vector: &mut [f64]) {
        let norm = match Self::l2_norm(vector) {
            n if n == 0.0 => 1.0,
            n => n,
        };
        vector.iter_mut().for_each(|x| *x /= norm);
    }

    /// Normalize a vector and return a new vector.
    pub fn normalize(vector: &[f64]) -> Vec<f64> {
        let mut normalized = vector.to_vec();
        Self::normalize_inplace(&mut normalized);
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!((VectorOps::cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);

        let c = vec![0.0, 1.0, 0.0];
        assert!(VectorOps::cosine_similarity(&a, &c).abs() < 1e-12);
        assert_eq!(VectorOps::cosine_similarity(&a, &[1.0]), 0.0);
    }

    #[test]
    fn test_normalize() {
        let v = vec![3.0, 4.0];
        let normalized = VectorOps::normalize(&v);
        assert!((normalized[0] - 0.6).abs() < 1e-12);
        assert!((normalized[1] - 0.8).abs() < 1e-12);
        assert!((VectorOps::l2_norm(&normalized) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let zero = vec![0.0; 4];
        assert_eq!(VectorOps::normalize(&zero), zero);
    }

    #[test]
    fn test_dot_product_length_mismatch() {
        assert_eq!(VectorOps::dot_product(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(VectorOps::dot_product(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
    }
}
