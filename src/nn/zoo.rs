/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : 预设网络：基准测试模型与 stack-4 棋盘评估模型
 *
 * 所有形状常量均为硬编码，与对应棋盘的尺寸严格匹配。
 */

use crate::nn::{Graph, GraphError, Network};
use crate::tensor::Tensor;
use std::path::Path;
use tracing::info;

/// 基准测试模型的棋盘尺寸（connect-4：6 行 7 列）
pub const BENCH_HEIGHT: usize = 6;
pub const BENCH_WIDTH: usize = 7;
/// 基准测试模型的默认导出路径
pub const BENCH_MODEL_PATH: &str = "benches/bench_model.pt";

/// stack-4 模型的棋盘尺寸（8x8）
pub const STACK4_HEIGHT: usize = 8;
pub const STACK4_WIDTH: usize = 8;
/// stack-4 模型的默认导出路径
pub const STACK4_MODEL_PATH: &str = "models/stack4_model.pt";

/// 冒烟测试输入的默认 batch 大小
pub const SAMPLE_BATCH: usize = 5;

/// 基准测试模型
///
/// ```text
/// Input [batch, 1, 6, 7]
///     ↓
/// conv1 (1→4, 3x3, pad=1) → ReLU → [batch, 4, 6, 7]
///     ↓
/// flatten → [batch, 168]
///     ↓
/// fc1 (168 → 20) → ReLU
///     ↓
/// fc2 (20 → 1) → [batch, 1]
/// ```
pub fn bench_model(seed: u64) -> Network {
    Network::builder("bench_model", &[1, BENCH_HEIGHT, BENCH_WIDTH])
        .seed(seed)
        .conv2d("conv1", 1, 4, (3, 3), (1, 1))
        .relu()
        .flatten()
        .linear("fc1", 4 * BENCH_WIDTH * BENCH_HEIGHT, 20)
        .relu()
        .linear("fc2", 20, 1)
        .build()
}

/// stack-4 棋盘评估模型
///
/// ```text
/// Input [batch, 1, 8, 8]
///     ↓
/// conv1 (1→8, 2x2) → ReLU → [batch, 8, 7, 7]
///     ↓
/// conv2 (8→16, 2x2) → ReLU → [batch, 16, 6, 6]
///     ↓
/// max_pool (2x2) → [batch, 16, 3, 3]
///     ↓
/// flatten → [batch, 144]
///     ↓
/// fc1 (144 → 70) → ReLU → fc2 (70 → 50) → ReLU → fc3 (50 → 1) → Tanh
/// ```
pub fn stack4_model(seed: u64) -> Network {
    Network::builder("stack4_model", &[1, STACK4_HEIGHT, STACK4_WIDTH])
        .seed(seed)
        .conv2d("conv1", 1, 8, (2, 2), (0, 0))
        .relu()
        .conv2d("conv2", 8, 16, (2, 2), (0, 0))
        .relu()
        .max_pool2d((2, 2))
        .flatten()
        .linear("fc1", 16 * (STACK4_WIDTH - 5) * (STACK4_HEIGHT - 5), 70)
        .relu()
        .linear("fc2", 70, 50)
        .relu()
        .linear("fc3", 50, 1)
        .tanh()
        .build()
}

/// 冒烟测试输入：由整数序列 0..batch*H*W 构成（转为双精度），形状 [batch, 1, H, W]
pub fn sample_input(batch: usize, height: usize, width: usize) -> Tensor {
    Tensor::arange(&[batch, 1, height, width])
}

/// 按网络的单样本输入形状构造冒烟测试输入 [batch, C, H, W]
pub fn sample_input_for(network: &Network, batch: usize) -> Tensor {
    let mut shape = vec![batch];
    shape.extend_from_slice(network.input_shape());
    Tensor::arange(&shape)
}

/// 冒烟测试的结果
#[derive(Debug)]
pub struct SmokeTestReport {
    pub input_shape: Vec<usize>,
    pub output: Tensor,
    pub graph: Graph,
}

/// 冒烟测试：前向一次 → 打印结果 → 追踪并导出到 `path` → 重新加载并确认输出形状一致
pub fn run_smoke_test<P: AsRef<Path>>(
    network: &Network,
    batch: usize,
    path: P,
) -> Result<SmokeTestReport, GraphError> {
    let path = path.as_ref();
    let input = sample_input_for(network, batch);
    println!("输入尺寸: {:?}", input.shape());

    let output = network.forward(&input)?;
    println!("输出: {output}");

    let graph = Graph::trace(network)?;
    graph.summary();
    graph.save(path)?;
    info!("模型 {} 已导出至 {}", network.name(), path.display());

    let reloaded = Graph::load(path)?.forward(&input)?;
    if reloaded.shape() != output.shape() {
        return Err(GraphError::InvalidArtifact(format!(
            "重新加载后的输出形状 {:?} 与原网络 {:?} 不一致",
            reloaded.shape(),
            output.shape()
        )));
    }

    Ok(SmokeTestReport {
        input_shape: input.shape().to_vec(),
        output,
        graph,
    })
}
