/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : 分数曲线工具的错误类型
 */

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("无法读取分数文件 {path}：{source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 输入不是扁平的数值 JSON 数组
    #[error("分数数据格式错误：{0}")]
    Malformed(#[from] serde_json::Error),
    #[error("分数序列为空")]
    Empty,
    /// 滑动平均窗口须满足 1 <= window <= len
    #[error("无效的滑动平均窗口 {window}（序列长度为 {len}）")]
    InvalidWindow { window: i64, len: usize },
    #[error("绘图失败：{0}")]
    Render(#[from] image::ImageError),
}
