use anyhow::{Context, Result};
use puzzlerank::config::{AppConfig, ConfigManager};
use puzzlerank::data::{split_dataset, CsvConnector};
use puzzlerank::engines::metrics::MetricsEngine;
use puzzlerank::model::LayerSpec;
use puzzlerank::puzzles::{load_puzzles, rank, write_ranks};
use puzzlerank::{Dataset, FitnessEvaluator, Predictor};

const DEFAULT_CONFIG: &str = "puzzlerank.toml";

fn main() -> Result<()> {
    // Configure logging via RUST_LOG
    env_logger::init();

    let config_path = std::env::var("PUZZLERANK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let manager = ConfigManager::new();
    manager
        .load_layered(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path))?;
    let config = manager.get();

    let mut layers = config.model.layers.clone();
    let weights = config.model.weights.as_deref();

    if let Some(csv_path) = &config.data.csv_path {
        let (dataset, metadata) = CsvConnector::load_dataset(csv_path)
            .with_context(|| format!("Failed to load dataset {}", csv_path.display()))?;

        if layers.is_empty() {
            layers = LayerSpec::linear_default(metadata.num_features).0;
        }
        let fitness_weights = weights
            .map(<[f64]>::to_vec)
            .unwrap_or_else(|| vec![0.0; metadata.num_features + 1]);

        let predictor = Predictor::new(&layers);
        report_fitness(&config, &predictor, &dataset, &fitness_weights)?;
    }

    if let (Some(puzzles_path), Some(ranks_path)) = (&config.output.puzzles_path, &config.output.ranks_path) {
        let puzzles = load_puzzles(puzzles_path)
            .with_context(|| format!("Failed to read puzzles {}", puzzles_path.display()))?;

        let ranks = rank(&Predictor::new(&layers), weights, &puzzles)?;

        write_ranks(ranks_path, &ranks)
            .with_context(|| format!("Failed to write ranks {}", ranks_path.display()))?;
        log::info!("Wrote {} ranks to {}", ranks.len(), ranks_path.display());
    }

    Ok(())
}

fn report_fitness(config: &AppConfig, predictor: &Predictor, dataset: &Dataset, weights: &[f64]) -> Result<()> {
    let (train, test) = split_dataset(dataset, config.data.train_test_split, config.data.shuffle_seed)?;
    let engine = MetricsEngine::new(config.data.success_epsilon);

    for (name, part) in [("train", &train), ("test", &test)] {
        if part.is_empty() {
            log::warn!("{} split is empty, skipping", name);
            continue;
        }

        let evaluator = FitnessEvaluator::new(predictor, part)?;
        let report = match evaluator.report(weights) {
            Ok(report) => report,
            Err(e) => {
                log::warn!("{} split could not be scored: {}", name, e);
                continue;
            }
        };

        let mut predictions = Vec::new();
        let mut targets = Vec::new();
        for sample in &part.samples {
            predictions.extend(predictor.predict(weights, &sample.rows, &sample.true_order, config.model.debug)?);
            targets.extend_from_slice(&sample.true_order);
        }

        let metrics = engine.calculate_all(&report, &predictions, &targets)?;
        log::info!(
            "{}: mean rank distance {:.4} over {} samples, mse {:.4}, error rate {}%",
            name,
            report.mean,
            part.len(),
            metrics.get("mse").copied().unwrap_or(0.0),
            metrics.get("error_rate_pct").copied().unwrap_or(0.0)
        );
    }

    Ok(())
}
