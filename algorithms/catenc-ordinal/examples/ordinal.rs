use std::sync::Arc;
use std::thread;

use catenc::prelude::*;
use catenc_ordinal::{OneHotEncoder, OrdinalEncoder};
use ndarray::array;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let dataset: DatasetBase<_, ()> = array!["lyon", "paris", "lyon", "nice"].into();
    let encoder = Arc::new(OrdinalEncoder::params().reserve_empty(true).fit(&dataset)?);
    println!("fitted categories {:?}", encoder.list());

    // encoders are shared between threads, new categories get the next free code
    let handles = ["brest", "paris", "lille"]
        .iter()
        .map(|&city| {
            let encoder = Arc::clone(&encoder);
            thread::spawn(move || (city, encoder.encode(city)))
        })
        .collect::<Vec<_>>();
    for handle in handles {
        if let Ok((city, code)) = handle.join() {
            println!("{} -> {}", city, code);
        }
    }

    let csv = encoder.to_csv()?;
    println!("{}", String::from_utf8_lossy(&csv));

    let one_hot = OneHotEncoder::from_csv(&csv)?;
    let codeword = one_hot.encode("nice");
    println!("nice -> {} -> {}", codeword, one_hot.decode(&codeword)?);

    Ok(())
}
