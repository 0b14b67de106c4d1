use crate::error::ClusterError;
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Immutable set of word-labelled embedding vectors with a single shared
/// dimensionality.
///
/// Row `i` of the data matrix is the embedding of `words()[i]`; enumeration
/// order is the order the pairs were supplied in and is preserved all the
/// way through to the clustering result. The engine never mutates the data,
/// it copies rows when it needs centroid storage.
#[derive(Debug, Clone)]
pub struct VectorSet {
    words: Vec<String>,
    data: Array2<f32>,
}

impl VectorSet {
    /// Build a vector set from parallel word and data storage.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::Configuration` if the word count does not
    /// match the number of data rows.
    pub fn new(words: Vec<String>, data: Array2<f32>) -> Result<Self, ClusterError> {
        if words.len() != data.nrows() {
            return Err(ClusterError::Configuration(format!(
                "{} words for {} vectors",
                words.len(),
                data.nrows()
            )));
        }
        Ok(Self { words, data })
    }

    /// Build a vector set from (word, vector) pairs.
    ///
    /// The first pair establishes the dimensionality; every subsequent
    /// vector must match it.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::DimensionMismatch` on the first vector whose
    /// length disagrees with the established dimensionality.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ClusterError>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let mut words = Vec::new();
        let mut flat: Vec<f32> = Vec::new();
        let mut dimensions = 0usize;

        for (word, vector) in pairs {
            if words.is_empty() {
                dimensions = vector.len();
            } else if vector.len() != dimensions {
                return Err(ClusterError::DimensionMismatch {
                    expected: dimensions,
                    found: vector.len(),
                });
            }
            words.push(word);
            flat.extend(vector);
        }

        let n = words.len();
        let data = Array2::from_shape_vec((n, dimensions), flat)
            .map_err(|e| ClusterError::Configuration(e.to_string()))?;

        Ok(Self { words, data })
    }

    /// Number of vectors in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set holds no vectors
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Shared dimensionality of all vectors
    pub fn dimensions(&self) -> usize {
        self.data.ncols()
    }

    /// All words in enumeration order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The word associated with vector `index`
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// The embedding of vector `index`
    pub fn vector(&self, index: usize) -> ArrayView1<'_, f32> {
        self.data.row(index)
    }

    /// Read-only view of the full (n, d) data matrix
    pub fn data(&self) -> ArrayView2<'_, f32> {
        self.data.view()
    }
}
