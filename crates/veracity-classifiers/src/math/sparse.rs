/// Sparse numeric vector: (index, value) pairs sorted by index, plus the
/// dimensionality of the dense space it lives in. Zero entries are never
/// stored.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from unordered (index, value) pairs. Duplicate indices are
    /// summed and zero values dropped. Indices must be below `dim`.
    pub fn from_entries(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(index, _)| index);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (index, value) in entries {
            assert!(index < dim, "index {} out of bounds for dim {}", index, dim);
            match merged.last_mut() {
                Some(last) if last.0 == index => last.1 += value,
                _ => merged.push((index, value)),
            }
        }
        merged.retain(|&(_, value)| value != 0.0);

        SparseVector { dim, entries: merged }
    }

    /// The all-zero vector of the given dimensionality.
    pub fn empty(dim: usize) -> Self {
        SparseVector { dim, entries: Vec::new() }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored (nonzero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Value at `index`, zero when not stored.
    pub fn get(&self, index: usize) -> f64 {
        assert!(index < self.dim, "index {} out of bounds for dim {}", index, self.dim);
        match self.entries.binary_search_by_key(&index, |&(i, _)| i) {
            Ok(pos) => self.entries[pos].1,
            Err(_) => 0.0,
        }
    }

    pub fn l2_norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, value)| value * value)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale so the vector has unit L2 norm. The zero vector is left
    /// unchanged.
    pub fn normalize(&mut self) {
        let norm = self.l2_norm();
        if norm > 0.0 {
            for entry in self.entries.iter_mut() {
                entry.1 /= norm;
            }
        }
    }

    /// Densify, mostly for tests and debugging.
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dim];
        for &(index, value) in &self.entries {
            dense[index] = value;
        }
        dense
    }
}
