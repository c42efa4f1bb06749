use puzzlerank::config::ConfigManager;
use puzzlerank::data::{split_dataset, CsvConnector};
use puzzlerank::engines::metrics::MetricsEngine;
use puzzlerank::model::LayerSpec;
use puzzlerank::puzzles::{load_puzzles, rank, rank_by_estimate, rank_by_model, write_ranks};
use puzzlerank::{FitnessEvaluator, Predictor, PuzzleRankError};

const CSV_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/puzzles_sample.csv");
const TRAIN_CSV_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/puzzles_train.csv");
const PUZZLES_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/puzzles.json");

#[test]
fn test_load_dataset_groups_by_repository() {
    let (dataset, metadata) = CsvConnector::load_dataset(CSV_PATH).unwrap();

    assert_eq!(metadata.num_rows, 8);
    assert_eq!(metadata.num_groups, 3);
    assert_eq!(metadata.num_features, 4);
    assert_eq!(metadata.layout.group_column, "repo_id");
    assert_eq!(metadata.layout.target_column, "order");
    assert_eq!(metadata.target_range, (1.0, 3.0));

    let groups: Vec<&str> = dataset.samples.iter().map(|s| s.group.as_str()).collect();
    assert_eq!(groups, vec!["17", "42", "9"]);
    assert_eq!(dataset.samples[0].rows[1].flatten(), vec![40.0, 15.0, 80.0, 2.0]);
    assert_eq!(dataset.samples[2].true_order, vec![1.0, 3.0, 2.0]);
}

#[test]
fn test_missing_csv_is_an_error() {
    let result = CsvConnector::load_dataset("tests/data/does_not_exist.csv");
    assert!(result.is_err());
}

#[test]
fn test_train_each_repository() {
    let (dataset, metadata) = CsvConnector::load_dataset(CSV_PATH).unwrap();
    let (layers, params) = LayerSpec::linear_default(metadata.num_features);
    let predictor = Predictor::new(&layers);
    assert_eq!(predictor.layout().total_parameters(), params);

    // Older puzzles first: weight only the age column, negatively
    let weights = vec![-1.0, 0.0, 0.0, 0.0, 0.0];
    for sample in &dataset.samples {
        let distance = predictor.train(&weights, &sample.rows, &sample.true_order, true).unwrap();
        assert!((0.0..=1.0).contains(&distance));
        assert_eq!(distance, predictor.kendall(&weights, &sample.rows, &sample.true_order).unwrap());
    }

    let repo_17 = &dataset.samples[0];
    assert_eq!(predictor.kendall(&weights, &repo_17.rows, &repo_17.true_order).unwrap(), 0.0);
}

#[test]
fn test_fitness_truncates_weights_per_repository() {
    let (dataset, _) = CsvConnector::load_dataset(CSV_PATH).unwrap();
    let predictor = Predictor::default();
    let evaluator = FitnessEvaluator::new(&predictor, &dataset).unwrap();

    // Repository 17 has three puzzles, so only three weights reach its four-feature rows
    let result = evaluator.report(&[1.0, 0.0, 0.0, 0.0, 0.0]);
    assert!(matches!(
        result,
        Err(PuzzleRankError::DimensionMismatch { required: 4, available: 3 })
    ));
}

#[test]
fn test_training_fixture_scores_every_split() {
    let (dataset, metadata) = CsvConnector::load_dataset(TRAIN_CSV_PATH).unwrap();
    assert_eq!(metadata.num_groups, 5);
    assert_eq!(metadata.num_features, 4);
    // Every repository has at least as many puzzles as features
    assert!(dataset.samples.iter().all(|s| s.len() >= metadata.num_features));

    let predictor = Predictor::default();
    let weights = vec![0.0; metadata.num_features + 1];
    let (train, test) = split_dataset(&dataset, 0.8, Some(42)).unwrap();
    assert_eq!((train.len(), test.len()), (4, 1));

    for part in [&dataset, &train, &test] {
        let evaluator = FitnessEvaluator::new(&predictor, part).unwrap();
        let report = evaluator.report(&weights).unwrap();
        assert_eq!(report.per_sample.len(), part.len());
        assert!((0.0..=1.0).contains(&report.mean));
    }
}

#[test]
fn test_split_and_metrics() {
    let (dataset, _) = CsvConnector::load_dataset(CSV_PATH).unwrap();
    let (train, test) = split_dataset(&dataset, 0.67, Some(5)).unwrap();
    assert_eq!(train.len() + test.len(), 3);
    assert_eq!(train.len(), 2);

    let predictor = Predictor::default();
    let weights = [0.0, 0.0, 0.0, 0.01, 0.0];
    let mut predictions = Vec::new();
    let mut targets = Vec::new();
    let mut distances = Vec::new();
    for sample in &train.samples {
        predictions.extend(predictor.predict(&weights, &sample.rows, &[], false).unwrap());
        targets.extend_from_slice(&sample.true_order);
        distances.push(predictor.kendall(&weights, &sample.rows, &sample.true_order).unwrap());
    }

    let report = puzzlerank::FitnessReport {
        mean: distances.iter().sum::<f64>() / distances.len() as f64,
        per_sample: distances,
    };
    let metrics = MetricsEngine::new(0.5).calculate_all(&report, &predictions, &targets).unwrap();
    assert_eq!(metrics["num_samples"], 2.0);
    assert_eq!(metrics["success"] + metrics["failure"], predictions.len() as f64);
}

#[test]
fn test_rank_puzzles_and_write() {
    let puzzles = load_puzzles(PUZZLES_PATH).unwrap();
    assert_eq!(puzzles.len(), 3);

    assert_eq!(rank_by_estimate(&puzzles), vec![1, 0, 2]);

    let ranks = rank_by_model(&Predictor::default(), &[1.0, 0.0, 0.0, 0.0], &puzzles).unwrap();
    assert_eq!(ranks, vec![0, 2, 1]);

    let path = std::env::temp_dir().join(format!("puzzlerank-ranks-{}.txt", std::process::id()));
    write_ranks(&path, &ranks).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(written, "0 2 1");
}

#[test]
fn test_unweighted_config_ranks_by_estimate() {
    let path = std::env::temp_dir().join(format!("puzzlerank-est-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        format!(
            "[data]\ncsv_path = \"{}\"\n\n[output]\npuzzles_path = \"{}\"\nranks_path = \"ranks.txt\"\n",
            TRAIN_CSV_PATH, PUZZLES_PATH
        ),
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    // A dataset being configured must not make up weights for ranking
    let config = manager.get();
    assert!(config.data.csv_path.is_some());
    assert_eq!(config.model.weights, None);

    let puzzles = load_puzzles(PUZZLES_PATH).unwrap();
    let ranks = rank(&Predictor::default(), config.model.weights.as_deref(), &puzzles).unwrap();
    assert_eq!(ranks, rank_by_estimate(&puzzles));
    assert_eq!(ranks, vec![1, 0, 2]);
}

#[test]
fn test_config_file_drives_layers() {
    let path = std::env::temp_dir().join(format!("puzzlerank-it-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        format!(
            "[data]\ncsv_path = \"{}\"\nshuffle_seed = 3\n\n[[model.layers]]\nname = \"w1\"\nshape = [4, 1]\n",
            CSV_PATH
        ),
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let config = manager.get();
    let predictor = Predictor::new(&config.model.layers);
    assert_eq!(predictor.layout().shape("w1"), Some([4, 1]));
    assert_eq!(config.data.shuffle_seed, Some(3));
    assert!(config.data.csv_path.is_some());
}
