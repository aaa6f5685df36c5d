use sigmoid_nn::{
    matrix::Matrix2,
    neural::{
        config::NeuralNetConfig,
        metrics::{accuracy, one_hot},
        NeuralNet,
    },
    prelude::*,
};

/// Trains a 2-2-2 network on a truth table and reports its accuracy.
fn learn_gate(name: &str, truth: [usize; 4]) -> Result<()> {
    let inputs: Matrix2<f64> = Matrix2::from_array([[0, 0], [0, 1], [1, 0], [1, 1]]).into();
    let labels = one_hot(&truth, 2)?;

    let config = NeuralNetConfig::new(2, 2, 2, 5_000, 0.5)?.with_log(Some(1_000));
    let mut net = NeuralNet::new(config);
    net.train(&inputs, &labels)?;

    if let (Some(hidden), Some(output)) = (net.hidden_layer(), net.output_layer()) {
        println!(
            "{name} network: {} inputs -> {} hidden -> {} outputs",
            hidden.input_amount(),
            hidden.neuron_amount(),
            output.neuron_amount()
        );
    }

    println!("------------------");
    println!(
        "{name} final cost: {}",
        net.mean_squared_error(&inputs, &labels)?
    );

    let res = net.predict(&inputs)?;
    for (inp, out) in inputs.clone().to_vec().into_iter().zip(res.clone().to_vec()) {
        println!("{inp:?} -> {out:.3?}");
    }

    println!("Accuracy = {:.2}", accuracy(&res, &labels)?);
    Ok(())
}

fn main() {
    env_logger::init();

    for (name, truth) in [("AND", [0, 0, 0, 1]), ("OR", [0, 1, 1, 1])] {
        if let Err(err) = learn_gate(name, truth) {
            log::error!("{name}: {err}");
            std::process::exit(1);
        }
    }
}
