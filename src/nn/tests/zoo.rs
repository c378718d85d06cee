/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : 预设网络测试：输出形状、维度不匹配、参数量
 */

use crate::nn::zoo::{
    BENCH_HEIGHT, BENCH_WIDTH, SAMPLE_BATCH, STACK4_HEIGHT, STACK4_WIDTH, bench_model,
    sample_input, stack4_model,
};
use crate::nn::{DEFAULT_SEED, GraphError};

#[test]
fn test_bench_model_forward_shape() -> Result<(), GraphError> {
    let net = bench_model(DEFAULT_SEED);
    for batch in [1, 2, SAMPLE_BATCH, 9] {
        let output = net.forward(&sample_input(batch, BENCH_HEIGHT, BENCH_WIDTH))?;
        assert_eq!(output.shape(), &[batch, 1]);
        assert!(output.to_vec().iter().all(|v| v.is_finite()));
    }
    Ok(())
}

#[test]
fn test_stack4_model_forward_shape_and_range() -> Result<(), GraphError> {
    let net = stack4_model(DEFAULT_SEED);
    for batch in [1, SAMPLE_BATCH] {
        let output = net.forward(&sample_input(batch, STACK4_HEIGHT, STACK4_WIDTH))?;
        assert_eq!(output.shape(), &[batch, 1]);
        // 末层 tanh
        assert!(output.to_vec().iter().all(|v| (-1.0..=1.0).contains(v)));
    }
    Ok(())
}

#[test]
fn test_bench_model_rejects_other_board() {
    let net = bench_model(DEFAULT_SEED);
    let err = net
        .forward(&sample_input(SAMPLE_BATCH, STACK4_HEIGHT, STACK4_WIDTH))
        .unwrap_err();
    assert!(err.is_shape_mismatch(), "{err}");
}

#[test]
fn test_stack4_model_rejects_other_board() {
    let net = stack4_model(DEFAULT_SEED);
    let err = net
        .forward(&sample_input(SAMPLE_BATCH, BENCH_HEIGHT, BENCH_WIDTH))
        .unwrap_err();
    assert!(err.is_shape_mismatch(), "{err}");
}

#[test]
fn test_parameter_counts() {
    // conv1 36+4，fc1 3360+20，fc2 20+1
    assert_eq!(bench_model(DEFAULT_SEED).parameter_count(), 3441);
    // conv1 32+8，conv2 512+16，fc1 10080+70，fc2 3500+50，fc3 50+1
    assert_eq!(stack4_model(DEFAULT_SEED).parameter_count(), 14319);
}

#[test]
fn test_sample_input() {
    let input = sample_input(SAMPLE_BATCH, BENCH_HEIGHT, BENCH_WIDTH);
    assert_eq!(input.shape(), &[5, 1, 6, 7]);
    assert_eq!(input.to_vec().last().copied(), Some(209.0));
}
