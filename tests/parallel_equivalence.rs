
use _fixtures::seeded_layer;
use percept::activation::Activation;
use percept::network::Network;
use percept::train::{mean_squared_error, Sample};
use percept::utils::init::SplitMix64;
use percept::utils::set_parallelism;

fn batch(count: usize, width: usize) -> Vec<Sample<f64>> {
    let mut stream = SplitMix64::new(0xba7c_0de5 ^ count as u64);
    (0..count)
        .map(|_| {
            let input = (0..width).map(|_| stream.next_unit::<f64>()).collect();
            let target = vec![stream.next_unit::<f64>()];
            Sample::new(input, target)
        })
        .collect()
}

#[test]
fn batch_error_is_bit_identical_across_modes() {
    let net = Network::new(vec![
        seeded_layer(6, 4, Activation::Tanh, 21),
        seeded_layer(4, 1, Activation::Sigmoid, 22),
    ])
    .expect("widths line up");

    // Several batch sizes around the chunking boundary.
    for count in [1usize, 31, 32, 33, 257] {
        let samples = batch(count, 6);

        let sequential = {
            let _guard = set_parallelism(false);
            mean_squared_error(&net, &samples)
        };
        let parallel = {
            let _guard = set_parallelism(true);
            mean_squared_error(&net, &samples)
        };

        assert_eq!(
            sequential.to_bits(),
            parallel.to_bits(),
            "batch of {count} diverged between modes"
        );
    }
}
