/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : 构建基准测试模型，对 [batch, 1, 6, 7] 的合成输入做一次前向，并导出计算图
 */

use anyhow::{Context, Result, ensure};
use clap::Parser;
use evalnet::nn::DEFAULT_SEED;
use evalnet::nn::zoo::{BENCH_MODEL_PATH, SAMPLE_BATCH, bench_model, run_smoke_test};
use evalnet::utils::init_tracing;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bench_model", version, about = "构建并导出基准测试用的卷积评估网络")]
struct Cli {
    /// 参数初始化种子
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// 冒烟测试输入的 batch 大小
    #[arg(long, default_value_t = SAMPLE_BATCH)]
    batch: usize,
    /// 模型导出路径
    #[arg(long, default_value = BENCH_MODEL_PATH)]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    ensure!(cli.batch >= 1, "batch 大小必须至少为 1");

    let network = bench_model(cli.seed);
    info!("已构建 {}（种子 {}，{} 个参数）", network.name(), network.seed(), network.parameter_count());

    let report = run_smoke_test(&network, cli.batch, &cli.output)
        .with_context(|| format!("{} 冒烟测试失败", network.name()))?;
    info!("输出形状 {:?}，模型已写入 {}", report.output.shape(), cli.output.display());
    Ok(())
}
