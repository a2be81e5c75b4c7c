//! Labeled reduction regression test
//!
//! Run with:
//! ```
//! cargo test -p ndlabel-region --test reduce_reg
//! ```

use ndarray::{Array1, ArrayD, arr1};
use ndlabel_region::ndlabel_core::StructuringElement;
use ndlabel_region::{
    Extremum, label, labeled_fold_into, labeled_max, labeled_max_min, labeled_min, labeled_sum,
};
use ndlabel_test::{RegParams, random_binary};

#[test]
fn reduce_reg() {
    let mut rp = RegParams::new("reduce");

    // -----------------------------------------------------------
    // Fixed example
    // -----------------------------------------------------------
    let values = arr1(&[5, 5, 0, 2, 2, 2, 0, 9]);
    let labels = arr1(&[1, 1, 0, 2, 2, 2, 0, 3]);
    rp.compare_arrays(&arr1(&[0, 10, 6, 9]), &labeled_sum(&values, &labels, 4).unwrap()); // 1
    rp.compare_arrays(
        &arr1(&[0, 5, 2, 9, i32::MIN]),
        &labeled_max(&values, &labels, 5).unwrap(),
    ); // 2
    rp.compare_arrays(
        &arr1(&[0, 5, 2]),
        &labeled_min(&values, &labels, 3).unwrap(),
    ); // 3

    // -----------------------------------------------------------
    // Region sizes, uniform values and per-region extremes
    // -----------------------------------------------------------
    let input = random_binary(&[16, 18, 5], 0.4, 3).unwrap();
    let mut labeled = input.clone();
    let n = label(&mut labeled, &StructuringElement::full(3)).unwrap();

    let ones = labeled.mapv(|_| 1usize);
    let sizes = labeled_sum(&ones, &labeled, n + 1).unwrap();
    rp.compare_values(labeled.len() as f64, sizes.sum() as f64, 0.0);
    rp.compare_values(
        input.iter().filter(|&&v| v == 0).count() as f64,
        sizes[0] as f64,
        0.0,
    );
    rp.check("no empty region", sizes.iter().skip(1).all(|&s| s > 0));

    // sum of a uniform value over k elements is k * v
    let uniform = labeled.mapv(|_| 0.25f64);
    let sums = labeled_sum(&uniform, &labeled, n + 1).unwrap();
    for (l, (&s, &k)) in sums.iter().zip(sizes.iter()).enumerate() {
        if l > 0 {
            rp.compare_values(0.25 * k as f64, s, 1e-9);
        }
    }

    // a value that encodes the flat index: max and min bracket each region
    let shape = labeled.shape().to_vec();
    let index = ArrayD::from_shape_vec(shape, (0..labeled.len() as i64).collect()).unwrap();
    let maxima = labeled_max_min(&index, &labeled, n + 1, Extremum::Max).unwrap();
    let minima = labeled_max_min(&index, &labeled, n + 1, Extremum::Min).unwrap();
    let mut first = Array1::from_elem(n + 1, i64::MAX);
    let mut last = Array1::from_elem(n + 1, i64::MIN);
    for (&l, &i) in labeled.iter().zip(index.iter()) {
        let l = l as usize;
        first[l] = first[l].min(i);
        last[l] = last[l].max(i);
    }
    rp.compare_arrays(&first, &minima);
    rp.compare_arrays(&last, &maxima);

    // region numbering follows first appearance, so region minima increase
    rp.check(
        "minima increase",
        minima
            .iter()
            .skip(1)
            .zip(minima.iter().skip(2))
            .all(|(a, b)| a < b),
    );

    // -----------------------------------------------------------
    // Booleans, short accumulators and custom folds
    // -----------------------------------------------------------
    let flags = labeled.mapv(|l| l % 2 == 0 && l != 0);
    let any = labeled_sum(&flags, &labeled, n + 1).unwrap();
    rp.check(
        "bool sum is any",
        any.iter()
            .enumerate()
            .all(|(l, &a)| a == (l != 0 && l % 2 == 0)),
    );

    let short = labeled_sum(&ones, &labeled, 2).unwrap();
    rp.compare_arrays(&sizes.slice(ndarray::s![..2]), &short);

    let mut counts = Array1::from_elem(n + 1, 0usize);
    labeled_fold_into(&ones, &labeled, &mut counts, 0, |v, acc| v + acc).unwrap();
    rp.compare_arrays(&sizes, &counts);

    assert!(rp.cleanup(), "reduce regression test failed");
}
