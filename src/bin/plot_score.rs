/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : 读取 JSON 分数序列（文件或标准输入），可选滑动平均后绘制折线图
 */

use anyhow::{Context, Result};
use clap::Parser;
use evalnet::score::{PlotConfig, open_score_file, prepare_scores};
use evalnet::utils::init_tracing;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "plot_score", version, about = "绘制分数曲线")]
struct Cli {
    /// 分数 JSON 文件（扁平数值数组）；缺省时从标准输入读取
    #[arg(long = "json_file")]
    json_file: Option<PathBuf>,
    /// 滑动平均窗口大小
    #[arg(long, allow_negative_numbers = true)]
    movmean: Option<i64>,
    /// 输出图片路径
    #[arg(long, default_value = "score_plot.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let scores = match &cli.json_file {
        Some(path) => prepare_scores(open_score_file(path)?, cli.movmean)
            .with_context(|| format!("无法从 {} 读取分数", path.display()))?,
        None => prepare_scores(std::io::stdin().lock(), cli.movmean)
            .context("无法从标准输入读取分数")?,
    };
    info!("共 {} 个点", scores.len());

    PlotConfig::default()
        .save(&scores, &cli.output)
        .with_context(|| format!("无法写入 {}", cli.output.display()))?;
    println!("分数曲线已保存至 {}", cli.output.display());
    Ok(())
}
