
use _fixtures::seeded_layer;
use percept::activation::Activation;
use percept::layer::DenseLayer;
use percept::network::Network;
use percept::train::{run_epochs, GradientDescent};
use percept::Compute;

#[test]
fn trained_network_roundtrips_through_json() {
    let mut net = Network::new(vec![
        seeded_layer(2, 3, Activation::Tanh, 5),
        seeded_layer(3, 1, Activation::Identity, 6),
    ])
    .expect("widths line up");

    let rule = GradientDescent::new(0.05);
    let samples = vec![
        percept::Sample::new(vec![0.1, -0.1], vec![0.1]),
        percept::Sample::new(vec![0.4, -0.4], vec![0.4]),
    ];
    run_epochs(&mut net, &rule, &samples, 10);

    let json = serde_json::to_string(&net).expect("serialize");
    let back: Network<f64> = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, net);
    let probe = [0.42, -0.17];
    assert_eq!(back.compute(&probe), net.compute(&probe));
}

#[test]
fn mismatched_stack_json_is_rejected() {
    // Hand-crafted payloads bypass Network::new, so deserialization has to
    // re-run the width checks itself.
    let first = seeded_layer(2, 3, Activation::Tanh, 8);
    let second = seeded_layer(4, 1, Activation::Identity, 9);
    let payload = serde_json::json!({ "layers": [first, second] });

    let err = serde_json::from_value::<Network<f64>>(payload)
        .expect_err("width mismatch must not deserialize");
    assert!(
        err.to_string().contains("previous layer produces"),
        "unexpected error: {err}"
    );

    let empty = serde_json::json!({ "layers": [] });
    assert!(serde_json::from_value::<Network<f64>>(empty).is_err());
}

#[test]
fn layer_roundtrip_preserves_every_parameter() {
    let layer = seeded_layer(4, 2, Activation::Sigmoid, 77);
    let json = serde_json::to_string(&layer).expect("serialize");
    let back: DenseLayer<f64> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, layer);
    assert_eq!(back.weights(), layer.weights());
    assert_eq!(back.biases(), layer.biases());
    assert_eq!(back.activation(), layer.activation());
}
