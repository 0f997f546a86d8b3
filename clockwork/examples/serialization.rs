//! Serializing angles, circles and statistics options.
//!
//! ```bash
//! cargo run --example serialization
//! ```

use clockwork::{serde_with_unit, Circle, ClockworkConfig, Degrees, MeanOptions};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct Observation {
    station: String,
    #[serde(with = "serde_with_unit")]
    wind_from: Degrees,
    gusts: Vec<Degrees>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let obs = Observation {
        station: "harbour".to_string(),
        wind_from: Degrees::new(355.0),
        gusts: vec![Degrees::new(350.0), Degrees::new(10.0)],
    };

    let json = serde_json::to_string_pretty(&obs)?;
    println!("{json}");

    let back: Observation = serde_json::from_str(&json)?;
    let mean = clockwork::stats::circular_mean(&back.gusts, &MeanOptions::default())?;
    println!("mean gust direction: {mean}");

    let circle: Circle = serde_json::from_str("24.0")?;
    println!("circle full arc: {}", circle.full_arc());

    let config = ClockworkConfig::from_toml_str("[stats]\nskip_nan = true\n")?;
    println!("{}", toml::to_string(&config)?);

    Ok(())
}
