use runplot::error::Error;
use runplot::histogram::Histogram;

// Helper: build a histogram from slices
fn hist(weights: &[f64], edges: &[f64]) -> Histogram {
    Histogram::new(weights.to_vec(), edges.to_vec()).unwrap()
}

#[test]
fn rebin_even_division() {
    let h = hist(
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    );
    let r = h.rebin(2).unwrap();
    assert_eq!(r.weights(), [3.0, 7.0, 11.0]);
    assert_eq!(r.edges(), [0.0, 2.0, 4.0, 6.0]);
}

#[test]
fn rebin_with_trailing_partial_group() {
    let h = hist(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    let r = h.rebin(2).unwrap();
    assert_eq!(r.weights(), [3.0, 7.0, 5.0]);
    // Stride keeps [0, 2, 4]; the trailing edge is synthesized as last + factor.
    assert_eq!(r.edges(), [0.0, 2.0, 4.0, 6.0]);
}

#[test]
fn rebin_conserves_total_weight() {
    let h = hist(
        &[0.5, 1.5, 2.0, 7.25, 0.0, 3.0, 1.0],
        &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
    );
    for factor in 1..=8 {
        let r = h.rebin(factor).unwrap();
        assert!(
            (r.total() - h.total()).abs() < 1e-12,
            "total not conserved for factor {}",
            factor
        );
        assert_eq!(
            r.bin_count(),
            h.bin_count().div_ceil(factor),
            "wrong bin count for factor {}",
            factor
        );
        assert_eq!(r.edges().len(), r.bin_count() + 1);
    }
}

#[test]
fn rebin_by_one_is_the_identity() {
    let h = hist(&[4.0, 2.0, 9.0], &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(h.rebin(1).unwrap(), h);
}

#[test]
fn rebin_factor_beyond_bin_count_collapses_to_one_bin() {
    let h = hist(&[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0]);
    let r = h.rebin(5).unwrap();
    assert_eq!(r.weights(), [6.0]);
    assert_eq!(r.edges(), [0.0, 5.0]);
}

#[test]
fn rebin_factor_zero_is_rejected() {
    let h = hist(&[1.0], &[0.0, 1.0]);
    assert!(matches!(h.rebin(0), Err(Error::InvalidRebinFactor)));
}

#[test]
fn shape_mismatch_is_rejected_at_construction() {
    let err = Histogram::new(vec![1.0, 2.0], vec![0.0, 1.0]).unwrap_err();
    assert!(matches!(
        err,
        Error::ShapeMismatch {
            weights: 2,
            edges: 2
        }
    ));
}

#[test]
fn empty_histogram_rebins_to_empty() {
    let h = hist(&[], &[0.0]);
    let r = h.rebin(3).unwrap();
    assert!(r.weights().is_empty());
    assert_eq!(r.edges(), [0.0]);
}
