/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : 构建 stack-4 棋盘评估模型，对 [batch, 1, 8, 8] 的合成输入做一次前向，并导出计算图
 */

use anyhow::{Context, Result, ensure};
use clap::Parser;
use evalnet::nn::DEFAULT_SEED;
use evalnet::nn::zoo::{SAMPLE_BATCH, STACK4_MODEL_PATH, run_smoke_test, stack4_model};
use evalnet::utils::init_tracing;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stack4_model", version, about = "构建并导出 stack-4 棋盘评估网络")]
struct Cli {
    /// 参数初始化种子
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// 冒烟测试输入的 batch 大小
    #[arg(long, default_value_t = SAMPLE_BATCH)]
    batch: usize,
    /// 模型导出路径
    #[arg(long, default_value = STACK4_MODEL_PATH)]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    ensure!(cli.batch >= 1, "batch 大小必须至少为 1");

    let network = stack4_model(cli.seed);
    info!("已构建 {}（种子 {}，{} 个参数）", network.name(), network.seed(), network.parameter_count());

    let report = run_smoke_test(&network, cli.batch, &cli.output)
        .with_context(|| format!("{} 冒烟测试失败", network.name()))?;
    info!("输出形状 {:?}，模型已写入 {}", report.output.shape(), cli.output.display());
    Ok(())
}
