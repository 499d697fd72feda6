use rand::Rng;
use std::ops::Index;

/// Dense row-major matrix backed by a single contiguous buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    #[cfg(test)]
    pub(crate) fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Fills every entry with an independent uniform sample in [0, 1).
    pub fn random_uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let data = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
        Matrix { rows, cols, data }
    }

    /// Builds a matrix from nested rows. All rows must have the same length.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[Vec<f64>]) -> Matrix {
        let cols = rows.first().map_or(0, |r| r.len());
        assert!(rows.iter().all(|r| r.len() == cols), "ragged rows");
        Matrix {
            rows: rows.len(),
            cols,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Computes `v · M` for a row vector `v` of length `rows`, then maps each
    /// column sum through `functor`.
    pub fn vec_mul_map<F>(&self, v: &[f64], functor: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        debug_assert_eq!(v.len(), self.rows);
        let mut sums = vec![0.0; self.cols];
        for (i, &x) in v.iter().enumerate() {
            for (sum, w) in sums.iter_mut().zip(self.row(i)) {
                *sum += x * w;
            }
        }
        sums.into_iter().map(functor).collect()
    }

    /// Computes `M · v` for a column vector `v` of length `cols`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.cols);
        (0..self.rows)
            .map(|i| self.row(i).iter().zip(v).map(|(w, x)| w * x).sum())
            .collect()
    }

    /// In-place rank-one update: `M[i][j] += scale * a[i] * b[j]`.
    pub fn add_outer(&mut self, a: &[f64], b: &[f64], scale: f64) {
        debug_assert_eq!(a.len(), self.rows);
        debug_assert_eq!(b.len(), self.cols);
        for (i, &ai) in a.iter().enumerate() {
            for (w, &bj) in self.row_mut(i).iter_mut().zip(b) {
                *w += scale * ai * bj;
            }
        }
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_uniform_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random_uniform(3, 4, &mut rng);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert!(m.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_row_major_layout() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_vec_mul_map() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.vec_mul_map(&[1.0, 1.0], |x| x), vec![4.0, 6.0]);
        assert_eq!(m.vec_mul_map(&[2.0, 0.0], |x| x + 1.0), vec![3.0, 5.0]);
    }

    #[test]
    fn test_mul_vec() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(m.mul_vec(&[1.0, 0.5]), vec![2.0, 5.0]);
    }

    #[test]
    fn test_add_outer() {
        let mut m = Matrix::zeros(2, 2);
        m.add_outer(&[1.0, 2.0], &[3.0, 4.0], 0.5);
        assert_eq!(m.as_slice(), &[1.5, 2.0, 3.0, 4.0]);
    }
}
