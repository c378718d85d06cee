/*
 * @Author       : 老董
 * @Date         : 2026-01-28
 * @Description  : stack-4 棋盘评估模型端到端测试
 *                 网络结构：Input(1x8x8) -> Conv(8) -> Conv(16) -> MaxPool -> FC(70) -> FC(50) -> FC(1) -> Tanh
 */
use evalnet::nn::zoo::{
    BENCH_HEIGHT, BENCH_WIDTH, SAMPLE_BATCH, STACK4_HEIGHT, STACK4_WIDTH, run_smoke_test,
    sample_input, stack4_model,
};
use evalnet::nn::{DEFAULT_SEED, Graph, GraphError};

#[test]
fn test_stack4_model_forward() -> Result<(), GraphError> {
    let net = stack4_model(DEFAULT_SEED);
    for batch in [1, 3, SAMPLE_BATCH] {
        let output = net.forward(&sample_input(batch, STACK4_HEIGHT, STACK4_WIDTH))?;
        assert_eq!(output.shape(), &[batch, 1]);
        assert!(output.to_vec().iter().all(|v| (-1.0..=1.0).contains(v)));
    }
    Ok(())
}

#[test]
fn test_stack4_model_rejects_6x7_board() {
    let net = stack4_model(DEFAULT_SEED);
    let err = net
        .forward(&sample_input(SAMPLE_BATCH, BENCH_HEIGHT, BENCH_WIDTH))
        .unwrap_err();
    assert!(err.is_shape_mismatch(), "{err}");

    // 导出后的计算图在入口处即拒绝
    let graph = Graph::trace(&net).unwrap();
    let err = graph
        .forward(&sample_input(SAMPLE_BATCH, BENCH_HEIGHT, BENCH_WIDTH))
        .unwrap_err();
    assert!(matches!(err, GraphError::ShapeMismatch { .. }));
}

#[test]
fn test_stack4_model_export_and_evaluate() -> Result<(), GraphError> {
    let dir = std::env::temp_dir().join(format!("evalnet_it_stack4_{}", std::process::id()));
    let path = dir.join("models").join("stack4_model.pt");

    let report = run_smoke_test(&stack4_model(DEFAULT_SEED), SAMPLE_BATCH, &path)?;
    let reloaded = Graph::load(&path)?;
    assert_eq!(reloaded.descriptor().total_params(), 14319);

    // 按棋盘逐个评估与整批前向一致
    let input = sample_input(SAMPLE_BATCH, STACK4_HEIGHT, STACK4_WIDTH);
    let flat = input.to_vec();
    let boards: Vec<&[f64]> = flat.chunks(STACK4_HEIGHT * STACK4_WIDTH).collect();
    let values = reloaded.evaluate_batch(&boards)?;
    assert_eq!(values, report.output.to_vec());

    std::fs::remove_dir_all(&dir).ok();
    Ok(())
}
