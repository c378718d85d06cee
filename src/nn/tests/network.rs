/*
 * @Author       : 老董
 * @Date         : 2026-01-17
 * @Description  : Network 构建与前向传播测试
 */

use crate::nn::{GraphError, LayerSpec, Network, TraitLayer};
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;

fn tiny_network(seed: u64) -> Network {
    Network::builder("tiny", &[1, 4, 4])
        .seed(seed)
        .conv2d("conv1", 1, 2, (3, 3), (1, 1))
        .relu()
        .max_pool2d((2, 2))
        .flatten()
        .linear("fc1", 2 * 2 * 2, 3)
        .tanh()
        .build()
}

#[test]
fn test_builder_specs_and_names() {
    let net = tiny_network(1);
    assert_eq!(net.name(), "tiny");
    assert_eq!(net.input_shape(), &[1, 4, 4]);
    assert_eq!(
        net.specs(),
        vec![
            LayerSpec::Conv2d {
                in_channels: 1,
                out_channels: 2,
                kernel_size: (3, 3),
                stride: (1, 1),
                padding: (1, 1),
            },
            LayerSpec::ReLU,
            LayerSpec::MaxPool2d {
                kernel_size: (2, 2),
                stride: (2, 2),
            },
            LayerSpec::Flatten,
            LayerSpec::Linear {
                in_features: 8,
                out_features: 3,
            },
            LayerSpec::Tanh,
        ]
    );

    let names: Vec<&str> = net.layers().iter().map(TraitLayer::name).collect();
    assert_eq!(names, vec!["conv1", "relu_1", "pool_2", "flatten_3", "fc1", "tanh_5"]);

    let param_names: Vec<&str> = net
        .layers()
        .iter()
        .flat_map(TraitLayer::parameters)
        .map(|(name, _)| name)
        .collect();
    assert_eq!(param_names, vec!["conv1_K", "conv1_b", "fc1_W", "fc1_b"]);
}

#[test]
fn test_parameter_count() {
    // conv1: 2*1*3*3 + 2 = 20；fc1: 8*3 + 3 = 27
    assert_eq!(tiny_network(1).parameter_count(), 47);
}

#[test]
fn test_forward_shape() -> Result<(), GraphError> {
    let net = tiny_network(1);
    for batch in 1..=4 {
        let output = net.forward(&Tensor::arange(&[batch, 1, 4, 4]))?;
        assert_eq!(output.shape(), &[batch, 3]);
        assert!(output.to_vec().iter().all(|v| v.abs() <= 1.0));
    }
    Ok(())
}

#[test]
fn test_same_seed_is_reproducible() -> Result<(), GraphError> {
    let input = Tensor::arange(&[2, 1, 4, 4]).map(|x| x / 16.0);
    let a = tiny_network(3).forward(&input)?;
    let b = tiny_network(3).forward(&input)?;
    assert_eq!(a, b);

    let params = |seed| {
        tiny_network(seed)
            .layers()
            .iter()
            .flat_map(TraitLayer::parameters)
            .map(|(_, tensor)| tensor.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(params(3), params(3));
    assert_ne!(params(3), params(4));
    Ok(())
}

#[test]
fn test_biases_start_at_zero() {
    let net = tiny_network(9);
    for (name, tensor) in net.layers().iter().flat_map(TraitLayer::parameters) {
        if name.ends_with("_b") {
            assert!(tensor.to_vec().iter().all(|&v| v == 0.0), "{name}");
        }
    }
}

/// 空间尺寸不符时在第一个全连接层报告维度不匹配
#[test]
fn test_forward_wrong_spatial_shape() {
    let net = tiny_network(1);
    let result = net.forward(&Tensor::arange(&[2, 1, 6, 6]));
    match result {
        Err(GraphError::ShapeMismatch { expected, got, .. }) => {
            assert_eq!(expected, vec![2, 8]);
            assert_eq!(got, vec![2, 18]);
        }
        other => panic!("期望 ShapeMismatch，得到 {other:?}"),
    }
}

#[test]
fn test_forward_identity_like_network() -> Result<(), GraphError> {
    // 无参数层组成的网络：ReLU 后展平
    let net = Network::builder("plain", &[1, 2, 2]).relu().flatten().build();
    let input = Tensor::new(&[-1., 2., -3., 4.], &[1, 1, 2, 2]);
    let output = net.forward(&input)?;
    assert_eq!(output.shape(), &[1, 4]);
    assert_abs_diff_eq!(output[[0, 0]], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(output[[0, 3]], 4.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_seed_is_recorded() {
    assert_eq!(tiny_network(3).seed(), 3);
    let net = Network::builder("plain", &[1, 2, 2]).flatten().build();
    assert_eq!(net.seed(), crate::nn::DEFAULT_SEED);
}
