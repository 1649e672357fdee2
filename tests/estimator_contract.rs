// Contract tests for OneNearestNeighbor: the fit/predict/score behaviour an
// external estimator harness relies on.

use one_nearest_neighbor::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn fit(x: &[Vec<f64>], y: &[i64]) -> OneNearestNeighbor<f64, i64> {
    let mut knn = OneNearestNeighbor::new();
    knn.fit(x, y).expect("fit");
    knn
}

/// Full distance matrix followed by a first-occurrence argmin per row.
fn argmin_reference(train: &[Vec<f64>], query: &[Vec<f64>]) -> Vec<usize> {
    query
        .iter()
        .map(|q| {
            let dists: Vec<f64> = train
                .iter()
                .map(|t| {
                    q.iter()
                        .zip(t)
                        .map(|(a, b)| (a - b) * (a - b))
                        .sum::<f64>()
                        .sqrt()
                })
                .collect();
            let mut best = 0;
            for (j, &d) in dists.iter().enumerate() {
                if d < dists[best] {
                    best = j;
                }
            }
            best
        })
        .collect()
}

#[test]
fn tie_between_identical_rows_picks_first() {
    let knn = fit(&[vec![0.0, 0.0], vec![0.0, 0.0]], &[0, 1]);
    assert_eq!(knn.predict(&[[0.0, 0.0]]).unwrap(), vec![0]);
}

#[test]
fn string_labels_scenario() {
    let mut knn = OneNearestNeighbor::new();
    knn.fit(&[vec![0.0], vec![10.0]], &["a".to_string(), "b".to_string()])
        .unwrap();
    assert_eq!(knn.predict(&[vec![1.0], vec![9.0]]).unwrap(), vec!["a", "b"]);
    assert_eq!(knn.classes().unwrap(), &["a".to_string(), "b".to_string()]);
}

#[test]
fn unfitted_predict_is_not_fitted_error() {
    let knn: OneNearestNeighbor<f64, i64> = OneNearestNeighbor::new();
    assert!(matches!(
        knn.predict(&[[1.0, 2.0]]),
        Err(ClassifierError::NotFitted { .. })
    ));
}

#[test]
fn wrong_feature_count_is_invalid_input() {
    let knn = fit(&[vec![0.0, 1.0], vec![1.0, 0.0]], &[0, 1]);
    assert!(matches!(
        knn.predict(&[[0.0, 1.0, 2.0]]),
        Err(ClassifierError::InvalidInput { .. })
    ));
    assert!(matches!(
        knn.predict(&[[0.0]]),
        Err(ClassifierError::InvalidInput { .. })
    ));
}

#[test]
fn refit_with_disjoint_data_forgets_first_fit() {
    let mut knn = fit(&[vec![0.0], vec![1.0]], &[1, 2]);
    knn.fit(&[vec![50.0], vec![60.0]], &[7, 8]).unwrap();

    assert_eq!(knn.classes().unwrap(), &[7, 8]);
    let preds = knn.predict(&[[0.0], [1.0], [59.0]]).unwrap();
    assert_eq!(preds, vec![7, 7, 8]);
}

#[test]
fn non_finite_training_features_are_rejected() {
    let mut knn: OneNearestNeighbor<f64, i64> = OneNearestNeighbor::new();
    let err = knn.fit(&[vec![0.0], vec![f64::NAN]], &[0, 1]).unwrap_err();
    assert!(matches!(err, ClassifierError::InvalidInput { .. }));
    assert!(!knn.is_fitted());
}

#[test]
fn empty_query_batch_is_rejected_by_default() {
    let knn = fit(&[vec![0.0]], &[0]);
    let empty: Vec<Vec<f64>> = vec![];
    assert!(matches!(
        knn.predict(&empty),
        Err(ClassifierError::InvalidInput { .. })
    ));
}

#[test]
fn empty_query_batch_allowed_when_configured() {
    let mut knn: OneNearestNeighbor<f64, i64, _> = OneNearestNeighbor::new()
        .with_dataset_validator(StrictValidator::new(
            ValidationOptions::default().with_min_samples(0),
        ));
    knn.fit(&[vec![0.0]], &[3]).unwrap();
    let empty: Vec<Vec<f64>> = vec![];
    assert!(knn.predict(&empty).unwrap().is_empty());
}

#[test]
fn separable_clusters_score_perfectly() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut x = Vec::new();
    let mut y = Vec::new();
    for class in 0..3_i64 {
        let center = class as f64 * 100.0;
        for _ in 0..20 {
            x.push(vec![
                center + rng.gen_range(-1.0..1.0),
                center + rng.gen_range(-1.0..1.0),
            ]);
            y.push(class);
        }
    }
    let knn = fit(&x, &y);

    let queries: Vec<Vec<f64>> = (0..3).map(|c| vec![c as f64 * 100.0 + 0.5; 2]).collect();
    assert_eq!(knn.predict(&queries).unwrap(), vec![0, 1, 2]);
    assert_eq!(knn.score(&x, &y).unwrap(), 1.0);
}

#[test]
fn matches_distance_matrix_argmin_on_random_data() {
    let mut rng = StdRng::seed_from_u64(7);
    // Coarse integer grid so that ties actually occur.
    let train: Vec<Vec<f64>> = (0..40)
        .map(|_| (0..3).map(|_| rng.gen_range(0..4) as f64).collect())
        .collect();
    let labels: Vec<i64> = (0..40).collect();
    let queries: Vec<Vec<f64>> = (0..100)
        .map(|_| (0..3).map(|_| rng.gen_range(0..4) as f64 + 0.5).collect())
        .collect();

    let knn = fit(&train, &labels);
    let expected: Vec<i64> = argmin_reference(&train, &queries)
        .into_iter()
        .map(|j| labels[j])
        .collect();
    assert_eq!(knn.predict(&queries).unwrap(), expected);
}

fn dataset() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<i64>)> {
    (1usize..5).prop_flat_map(|n_features| {
        prop::collection::vec(
            (prop::collection::vec(-100.0f64..100.0, n_features), 0i64..4),
            1..30,
        )
        .prop_map(|pairs: Vec<(Vec<f64>, i64)>| -> (Vec<Vec<f64>>, Vec<i64>) {
            pairs.into_iter().unzip()
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn training_rows_predict_their_first_occurrence_label((x, y) in dataset()) {
        let knn = fit(&x, &y);
        let preds = knn.predict(&x).unwrap();
        for (i, row) in x.iter().enumerate() {
            let first = x.iter().position(|other| other == row).unwrap();
            prop_assert_eq!(preds[i], y[first]);
        }
    }

    #[test]
    fn prediction_count_matches_query_count(
        (x, y) in dataset(),
        n_queries in 1usize..20,
    ) {
        let knn = fit(&x, &y);
        let n_features = x[0].len();
        let queries: Vec<Vec<f64>> = (0..n_queries)
            .map(|i| vec![i as f64; n_features])
            .collect();
        let preds = knn.predict(&queries).unwrap();
        prop_assert_eq!(preds.len(), n_queries);
        for p in &preds {
            prop_assert!(knn.classes().unwrap().contains(p));
        }
    }

    #[test]
    fn predict_is_deterministic((x, y) in dataset()) {
        let knn = fit(&x, &y);
        let shifted: Vec<Vec<f64>> = x
            .iter()
            .map(|r| r.iter().map(|v| v + 0.25).collect())
            .collect();
        prop_assert_eq!(knn.predict(&shifted).unwrap(), knn.predict(&shifted).unwrap());
    }

    #[test]
    fn score_is_a_fraction((x, y) in dataset(), offset in 0i64..3) {
        let knn = fit(&x, &y);
        let truth: Vec<i64> = y.iter().map(|v| (v + offset) % 4).collect();
        let score = knn.score(&x, &truth).unwrap();
        prop_assert!((0.0..=1.0).contains(&score));

        let preds = knn.predict(&x).unwrap();
        prop_assert_eq!(knn.score(&x, &preds).unwrap(), 1.0);
        let wrong: Vec<i64> = preds.iter().map(|p| p + 10).collect();
        prop_assert_eq!(knn.score(&x, &wrong).unwrap(), 0.0);
    }
}
