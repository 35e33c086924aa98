use accident_data::utils::generate_events;
use accident_forecast::forecast::{ForecastService, MeanForecaster, RecencyWeightedForecaster};
use accident_forecast::metrics::evaluate_service;
use accident_forecast::pipeline::{Pipeline, PipelineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    println!("Accident Forecast: Training Pipeline Example");
    println!("============================================\n");

    // Generate a synthetic four-year corpus for a few municipalities
    println!("Generating sample corpus...");
    let regions = ["Vilnius", "Kaunas", "Klaipeda", "Siauliai"];
    let events = generate_events(&regions, 4 * 365, 6, 42);
    println!("Sample corpus created: {} events\n", events.len());

    // Build training features: aggregate, encode, reindex, window, split
    println!("Preparing training data...");
    let pipeline = Pipeline::new(PipelineConfig {
        window_size: 30,
        holdout_years: 1,
    })?;
    let training = pipeline.prepare_training(&events)?;
    println!("{}", training.summary);

    // Persist the encoder next to where the model artifact would live
    let artifact_dir = tempfile::tempdir()?;
    let encoder_path = artifact_dir.path().join("region_encoder.json");
    training.encoder.save(&encoder_path)?;
    println!(
        "Encoder persisted ({} regions) to {}\n",
        training.encoder.len(),
        encoder_path.display()
    );

    // Score baseline forecasters on the held-out windows
    println!("Evaluating baselines on the held-out year...");
    let num_regions = training.encoder.len() as u32;

    let mean_service = ForecastService::new(MeanForecaster::new(), 30, num_regions)?;
    println!("{}", evaluate_service(&mean_service, &training.split.test)?);

    let recency_service =
        ForecastService::new(RecencyWeightedForecaster::new(0.2)?, 30, num_regions)?;
    println!(
        "{}",
        evaluate_service(&recency_service, &training.split.test)?
    );

    // Produce one next-day forecast per region
    println!("Next-day forecasts:");
    for region in regions {
        let window = pipeline.prepare_inference(&events, &training.encoder, region)?;
        let count = mean_service.predict_count(&window)?;
        println!("  {region}: {count}");
    }

    Ok(())
}
