use area_price::{Config, CurrencyFormat, InteractionController, RngNoise};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Noisy Reference Dataset ===\n");

    // Optional seed for a reproducible scatter.
    let mut noise = match std::env::args().nth(1) {
        Some(seed) => RngNoise::seeded(seed.parse()?),
        None => RngNoise::from_entropy(),
    };

    let mut controller = InteractionController::new(Config::noisy(), &mut noise)?;
    let usd = CurrencyFormat::usd();
    let model = *controller.model();

    println!("Model: {}", model);
    println!("Samples: {}\n", controller.dataset().n_samples());

    println!("{:>8} {:>14} {:>14} {:>12}", "area", "price", "line", "residual");
    for point in controller.dataset() {
        let line = model.predict(point.area());
        println!(
            "{:>8.1} {:>14} {:>14} {:>12.0}",
            point.area(),
            usd.format(point.price()),
            usd.format(line),
            point.price() - line
        );
    }

    let [start, end] = controller.reference_line();
    println!(
        "\nReference line: ({}, {}) → ({}, {})",
        start.area(),
        usd.format(start.price()),
        end.area(),
        usd.format(end.price())
    );
    println!("R² of the fixed line: {:.4}", model.score(controller.dataset())?);

    let prices = controller.dataset().prices();
    let line = model.predict_many(&controller.dataset().areas());
    let mse = area_price::metrics::mean_squared_error(&prices, &line)?;
    let worst = area_price::metrics::max_absolute_error(&prices, &line)?;
    println!("RMSE: {}  largest residual: {}", usd.format(mse.sqrt()), usd.format(worst));

    controller.set_area(250.0);
    println!("\nAt 250 m²: {}", serde_json::to_string_pretty(&controller.display(&usd))?);

    println!("\nDataset as JSON:");
    println!("{}", serde_json::to_string(controller.dataset())?);

    Ok(())
}
