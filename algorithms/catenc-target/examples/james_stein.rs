use catenc::prelude::*;
use catenc_target::{JamesSteinClassification, JamesSteinRegression};
use ndarray::{array, Array1};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let colours = array!["red", "blue", "red", "green", "blue", "red"];

    let prices = Dataset::new(colours.clone(), array![12.0, 4.5, 9.0, 20.0, 5.5, 10.5]);
    let regression = JamesSteinRegression::params().fit(&prices)?;
    println!("global mean price {:.2}", regression.global_mean());
    let encoded: Array1<f64> = regression.transform(&array!["blue", "purple"]);
    println!("blue, purple -> {}", encoded);

    let sold = Dataset::new(colours, array![true, false, true, true, false, false]);
    let classification: JamesSteinClassification<f64, bool> =
        JamesSteinClassification::params().fit(&sold)?;
    println!("observation weights {:.4}", classification.codes());
    if let Some(weight) = classification.weight("red", &true) {
        println!("weight of (red, sold) {:.4}", weight);
    }

    Ok(())
}
