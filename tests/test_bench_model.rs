/*
 * @Author       : 老董
 * @Date         : 2026-01-28
 * @Description  : 基准测试模型端到端测试：前向 → 导出 → 重新加载 → 前向
 *                 网络结构：Input(1x6x7) -> Conv(4) -> ReLU -> Flatten -> FC(20) -> ReLU -> FC(1)
 */
use evalnet::nn::zoo::{
    BENCH_HEIGHT, BENCH_WIDTH, SAMPLE_BATCH, bench_model, run_smoke_test, sample_input,
};
use evalnet::nn::{DEFAULT_SEED, Graph, GraphError};
use std::path::PathBuf;

fn temp_artifact(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("evalnet_it_{}", std::process::id()))
        .join(name)
}

#[test]
fn test_bench_model_forward_any_batch() -> Result<(), GraphError> {
    let net = bench_model(DEFAULT_SEED);
    for batch in 1..=8 {
        let output = net.forward(&sample_input(batch, BENCH_HEIGHT, BENCH_WIDTH))?;
        assert_eq!(output.shape(), &[batch, 1]);
    }
    Ok(())
}

#[test]
fn test_bench_model_export_and_reload() -> Result<(), GraphError> {
    let path = temp_artifact("bench_model.pt");
    let net = bench_model(DEFAULT_SEED);

    let report = run_smoke_test(&net, SAMPLE_BATCH, &path)?;
    assert_eq!(report.input_shape, vec![SAMPLE_BATCH, 1, BENCH_HEIGHT, BENCH_WIDTH]);
    assert_eq!(report.output.shape(), &[SAMPLE_BATCH, 1]);

    // 重新加载后，对同一输入得到相同形状与数值
    let input = sample_input(SAMPLE_BATCH, BENCH_HEIGHT, BENCH_WIDTH);
    let reloaded = Graph::load(&path)?;
    let output = reloaded.forward(&input)?;
    assert_eq!(output.shape(), report.output.shape());
    assert_eq!(output, report.output);
    assert_eq!(reloaded, report.graph);

    if let Some(dir) = path.parent() {
        std::fs::remove_dir_all(dir).ok();
    }
    Ok(())
}

#[test]
fn test_bench_model_rejects_8x8_board() {
    let net = bench_model(DEFAULT_SEED);
    let result = net.forward(&sample_input(SAMPLE_BATCH, 8, 8));
    assert!(matches!(result, Err(GraphError::ShapeMismatch { .. })));
}

#[test]
fn test_bench_model_seed_controls_values() -> Result<(), GraphError> {
    let input = sample_input(2, BENCH_HEIGHT, BENCH_WIDTH);
    let a = bench_model(1).forward(&input)?;
    let b = bench_model(1).forward(&input)?;
    let c = bench_model(2).forward(&input)?;
    assert_eq!(a, b);
    assert_ne!(a, c);
    Ok(())
}
