use ferrite_eq::data::{merge_complex, split_complex};
use ferrite_eq::{complex_divide, forward_propagation, AdditiveLoss, Matrix, ParameterSet, SamplePair};
use num_complex::Complex32;
use proptest::prelude::*;

fn samples(max_len: usize) -> impl Strategy<Value = Vec<Complex32>> {
    prop::collection::vec((-1e6f32..1e6f32, -1e6f32..1e6f32), 0..max_len)
        .prop_map(|v| v.into_iter().map(|(re, im)| Complex32::new(re, im)).collect())
}

fn feature_matrix(cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-1e3f64..1e3f64, 2 * cols)
        .prop_map(move |v| Matrix::from_data(vec![v[..cols].to_vec(), v[cols..].to_vec()]))
}

proptest! {
    #[test]
    fn split_then_merge_is_identity(s in samples(64)) {
        let m = split_complex(&s);
        prop_assert_eq!(m.shape(), (2, s.len()));
        prop_assert_eq!(merge_complex(&m), s);
    }

    #[test]
    fn pairs_split_to_the_shorter_width(x in samples(40), y in samples(40)) {
        let n = x.len().min(y.len());
        let pair = SamplePair { x, y };
        let splits = complex_divide(pair.clone(), pair);
        prop_assert_eq!(splits.x_train.shape(), (2, n));
        prop_assert_eq!(splits.y_train.shape(), (2, n));
        prop_assert_eq!(splits.x_test.cols, splits.y_test.cols);
    }

    #[test]
    fn forward_model_keeps_width(x in (1usize..50).prop_flat_map(feature_matrix), seed in 0u64..1000) {
        let params = ParameterSet::initialize(seed);
        prop_assert_eq!(forward_propagation(&x, &params).shape(), (2, x.cols));
    }

    #[test]
    fn additive_cost_is_non_negative(
        (p, y) in (1usize..30).prop_flat_map(|n| (feature_matrix(n), feature_matrix(n)))
    ) {
        prop_assert!(AdditiveLoss::loss(&p, &y) >= 0.0);
        prop_assert_eq!(AdditiveLoss::loss(&y.map(|v| -v), &y), 0.0);
    }
}
