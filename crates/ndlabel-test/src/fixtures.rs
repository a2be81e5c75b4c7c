//! Array fixtures for regression tests

use std::collections::HashMap;
use std::hash::Hash;

use ndarray::{Array2, ArrayBase, ArrayD, Data, Dimension, IxDyn};
use rand::SeedableRng;
use rand::distr::{Bernoulli, Distribution};
use rand::rngs::StdRng;

use crate::error::{TestError, TestResult};

/// Parse a whitespace-separated grid of integers into a 2-D array.
///
/// Blank lines are ignored; `.` is accepted as a synonym for `0` so masks can
/// be drawn legibly. Every row must have the same number of cells.
///
/// ```
/// use ndlabel_test::parse_grid;
///
/// let a = parse_grid(
///     "
///     1 1 .
///     . . 2
///     ",
/// )
/// .unwrap();
/// assert_eq!(a.shape(), &[2, 3]);
/// assert_eq!(a[[1, 2]], 2);
/// ```
pub fn parse_grid(text: &str) -> TestResult<Array2<i32>> {
    let mut cells = Vec::new();
    let mut width = None;
    let mut rows = 0;

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut count = 0;
        for token in line.split_whitespace() {
            let value = match token {
                "." => 0,
                _ => token.parse::<i32>().map_err(|e| TestError::GridParse {
                    line: line_no + 1,
                    message: format!("'{}': {}", token, e),
                })?,
            };
            cells.push(value);
            count += 1;
        }
        match width {
            None => width = Some(count),
            Some(w) if w != count => {
                return Err(TestError::GridParse {
                    line: line_no + 1,
                    message: format!("expected {} cells, found {}", w, count),
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    Ok(Array2::from_shape_vec((rows, width.unwrap_or(0)), cells)?)
}

/// Random 0/1 array of the given shape, each element 1 with probability
/// `density`. The same seed always yields the same array.
pub fn random_binary(shape: &[usize], density: f64, seed: u64) -> TestResult<ArrayD<i32>> {
    let dist = Bernoulli::new(density).map_err(|_| TestError::InvalidDensity(density))?;
    let mut rng = StdRng::seed_from_u64(seed);
    let len: usize = shape.iter().product();
    let data: Vec<i32> = (0..len).map(|_| dist.sample(&mut rng) as i32).collect();
    Ok(ArrayD::from_shape_vec(IxDyn(shape), data)?)
}

/// Whether two labelings describe the same partition.
///
/// Background (0) must coincide exactly; non-zero labels must correspond
/// one-to-one, whatever their numbering.
pub fn same_partition<S1, S2, D, A, B>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> bool
where
    S1: Data<Elem = A>,
    S2: Data<Elem = B>,
    D: Dimension,
    A: Copy + Eq + Hash + Default,
    B: Copy + Eq + Hash + Default,
{
    if a.shape() != b.shape() {
        return false;
    }

    let mut forward: HashMap<A, B> = HashMap::new();
    let mut backward: HashMap<B, A> = HashMap::new();
    for (&x, &y) in a.iter().zip(b.iter()) {
        if (x == A::default()) != (y == B::default()) {
            return false;
        }
        if *forward.entry(x).or_insert(y) != y || *backward.entry(y).or_insert(x) != x {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_parse_grid() {
        let a = parse_grid("1 0 2\n. 3 .\n").unwrap();
        assert_eq!(a, arr2(&[[1, 0, 2], [0, 3, 0]]));
    }

    #[test]
    fn test_parse_grid_ragged() {
        assert!(matches!(
            parse_grid("1 0\n1\n"),
            Err(TestError::GridParse { line: 2, .. })
        ));
        assert!(parse_grid("1 x").is_err());
    }

    #[test]
    fn test_random_binary_deterministic() {
        let a = random_binary(&[8, 9], 0.4, 7).unwrap();
        let b = random_binary(&[8, 9], 0.4, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.shape(), &[8, 9]);
        assert!(a.iter().all(|&v| v == 0 || v == 1));
    }

    #[test]
    fn test_random_binary_extremes() {
        assert!(random_binary(&[5], 0.0, 1).unwrap().iter().all(|&v| v == 0));
        assert!(random_binary(&[5], 1.0, 1).unwrap().iter().all(|&v| v == 1));
        assert!(matches!(
            random_binary(&[5], 1.5, 1),
            Err(TestError::InvalidDensity(_))
        ));
    }

    #[test]
    fn test_same_partition() {
        let a = arr2(&[[1, 1, 0], [2, 0, 3]]);
        let b = arr2(&[[7, 7, 0], [5, 0, 9]]);
        assert!(same_partition(&a, &b));

        // merged regions
        let c = arr2(&[[1, 1, 0], [1, 0, 3]]);
        assert!(!same_partition(&a, &c));
        assert!(!same_partition(&c, &a));

        // background moved
        let d = arr2(&[[1, 1, 4], [2, 0, 3]]);
        assert!(!same_partition(&a, &d));
    }
}
