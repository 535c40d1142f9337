use area_price::{Config, CurrencyFormat, InteractionController, NoNoise};
use std::io::{self, BufRead};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Area → Price Explorer ===\n");

    let config = Config::default();
    let mut controller = InteractionController::new(config, &mut NoNoise)?;
    let brl = CurrencyFormat::brl();

    println!("Model: {}", controller.model());
    println!(
        "Area range: {}–{} m²\n",
        controller.bounds().min,
        controller.bounds().max
    );

    println!("Reference dataset:");
    for point in controller.dataset() {
        println!("  {:>6.1} m²  {:>16}", point.area(), brl.format(point.price()));
    }

    let format = brl.clone();
    controller.subscribe(move |state, _| {
        println!("  area={:.0} m²  price={}", state.area(), format.format(state.predicted_price()));
    });

    let initial = controller.display(&brl);
    println!("\nInitial: {}", serde_json::to_string(&initial)?);

    // Areas come from the command line, or one per line on stdin.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<String> = if args.is_empty() {
        println!("Enter areas (one per line, Ctrl-D to finish):");
        io::stdin().lock().lines().collect::<Result<_, _>>()?
    } else {
        args
    };

    for input in inputs {
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        match input.parse::<f64>() {
            Ok(area) => {
                controller.set_area(area);
            }
            Err(e) => log::warn!("Ignoring '{}': {}", input, e),
        }
    }

    println!("\nFinal: {}", serde_json::to_string(&controller.display(&brl))?);
    Ok(())
}
