// XOR demonstration driver. Pass a path to a NetworkSpec JSON file to
// override the default 2-2-1 network and training schedule:
//   cargo run -- spec.json
use ferrite_mlp::{data, train_stochastic, NetworkError, NetworkSpec};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), NetworkError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let spec = match std::env::args().nth(1) {
        Some(path) => NetworkSpec::load_json(&path)?,
        None => NetworkSpec::xor(),
    };

    let mut rng = match spec.train.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let samples = data::xor();
    let mut network = spec.build(&mut rng)?;
    let report = train_stochastic(&mut network, &samples, &spec.train, &mut rng)?;
    tracing::info!(
        "Trained for {} iterations: loss {:.6} -> {:.6}",
        report.iterations, report.initial_loss, report.final_loss
    );

    for sample in &samples {
        let outputs = network.predict(&sample.inputs)?;
        println!("Inputs: {:?}, Output: {:?}", sample.inputs, outputs);
    }

    Ok(())
}
