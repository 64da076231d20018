
use _fixtures::{linear_samples, or_samples, seeded_layer};
use percept::activation::Activation;
use percept::layer::DenseLayer;
use percept::train::{mean_squared_error, run_epochs, GradientDescent, PerceptronRule};
use percept::{BackpropTrain, Compute, SupervisedTrain};

#[test]
fn perceptron_rule_learns_or() {
    // Start from weights that misclassify the positive samples. OR is
    // linearly separable through the origin, so the perceptron rule must
    // reach a consistent weight vector in a handful of passes.
    let mut layer = DenseLayer::from_fn(2, 1, Activation::Step, || -0.5f64);
    let rule = PerceptronRule::new(0.5);
    let samples = or_samples();

    for _ in 0..20 {
        for sample in &samples {
            layer.supervised_train(&rule, &sample.input, &sample.target);
        }
    }

    for sample in &samples {
        assert_eq!(
            layer.compute(&sample.input),
            sample.target,
            "misclassified {:?}",
            sample.input
        );
    }
}

#[test]
fn perceptron_rule_leaves_biases_untouched() {
    let mut layer = DenseLayer::from_fn(2, 1, Activation::Step, || -0.5f64);
    let rule = PerceptronRule::new(0.5);
    for sample in &or_samples() {
        layer.supervised_train(&rule, &sample.input, &sample.target);
    }
    assert_eq!(layer.biases(), &[-0.5]);
}

#[test]
fn gradient_descent_fits_a_scalar_slope() {
    // `new` keeps the bias at zero, which the recovered update rules never
    // touch, so the layer can represent y = 2x exactly.
    let mut layer = DenseLayer::<f64>::new(1, 1, Activation::Identity);
    let rule = GradientDescent::new(0.1);
    let samples = linear_samples(2.0, &[0.5, 1.0, 1.5]);

    let before = mean_squared_error(&layer, &samples);
    let history = run_epochs(&mut layer, &rule, &samples, 100);

    let after = *history.last().expect("history has one entry per epoch");
    assert_eq!(history.len(), 100);
    assert!(after < before, "error went from {before} to {after}");
    assert!(after < 1e-4, "final error {after} too large");
    assert!((layer.weights()[0] - 2.0).abs() < 0.05);
}

#[test]
fn backprop_returns_signal_of_input_length() {
    let mut layer = DenseLayer::from_fn(3, 2, Activation::Sigmoid, || 0.25f64);
    let rule = GradientDescent::new(0.05);
    let signal = layer.backprop_train(&rule, &[0.1, 0.2, 0.3], &[1.0, 0.0]);
    assert_eq!(signal.len(), 3);
}

#[test]
fn perceptron_truncated_target_reads_as_zero_padded() {
    let base = seeded_layer(2, 3, Activation::Step, 31);
    let rule = PerceptronRule::new(0.5);

    let mut short = base.clone();
    let mut padded = base;
    short.supervised_train(&rule, &[1.0, -0.5], &[1.0]);
    padded.supervised_train(&rule, &[1.0, -0.5], &[1.0, 0.0, 0.0]);

    assert_eq!(short, padded);
}

#[test]
fn backprop_truncated_target_reads_as_zero_padded() {
    let base = seeded_layer(2, 3, Activation::Sigmoid, 32);
    let rule = GradientDescent::new(0.1);

    let mut short = base.clone();
    let mut padded = base;
    let signal_short = short.backprop_train(&rule, &[0.3, 0.7], &[1.0]);
    let signal_padded = padded.backprop_train(&rule, &[0.3, 0.7], &[1.0, 0.0, 0.0]);

    assert_eq!(signal_short, signal_padded);
    assert_eq!(short, padded);
}

#[test]
fn zero_rate_is_a_no_op() {
    let mut layer = DenseLayer::from_fn(2, 2, Activation::Tanh, || 0.3f64);
    let frozen = layer.clone();
    let rule = GradientDescent::new(0.0);
    layer.supervised_train(&rule, &[1.0, -1.0], &[0.5, 0.5]);
    assert_eq!(layer, frozen);
}
