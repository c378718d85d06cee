/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : 分数序列：从 JSON 读取、滑动平均平滑、绘制折线图
 */

mod error;
mod plot;

pub use error::ScoreError;
pub use plot::PlotConfig;

use ndarray::ArrayView1;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

#[cfg(test)]
mod tests;

/// 从读取器解析扁平的 JSON 数值数组，如 `[0.1, -0.2, 0.3]`
pub fn load_scores<R: Read>(reader: R) -> Result<Vec<f64>, ScoreError> {
    let scores: Vec<f64> = serde_json::from_reader(reader)?;
    if scores.is_empty() {
        return Err(ScoreError::Empty);
    }
    debug!("读取到 {} 个分数", scores.len());
    Ok(scores)
}

/// 打开分数文件，失败时带上路径
pub fn open_score_file<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, ScoreError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ScoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub fn load_scores_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, ScoreError> {
    load_scores(open_score_file(path)?)
}

/// 滑动平均（仅保留完整窗口，即 "valid" 卷积），结果长度为 `len - window + 1`
///
/// 例：`moving_mean(&[1., 2., 3., 4., 5.], 2)` → `[1.5, 2.5, 3.5, 4.5]`
pub fn moving_mean(data: &[f64], window: i64) -> Result<Vec<f64>, ScoreError> {
    let invalid = || ScoreError::InvalidWindow {
        window,
        len: data.len(),
    };
    let n = usize::try_from(window).map_err(|_| invalid())?;
    if n == 0 || n > data.len() {
        return Err(invalid());
    }

    Ok(ArrayView1::from(data)
        .windows(n)
        .into_iter()
        .map(|w| w.sum() / n as f64)
        .collect())
}

/// 读取分数并按需平滑，文件与标准输入共用此入口
pub fn prepare_scores<R: Read>(reader: R, movmean: Option<i64>) -> Result<Vec<f64>, ScoreError> {
    let scores = load_scores(reader)?;
    match movmean {
        Some(window) => moving_mean(&scores, window),
        None => Ok(scores),
    }
}
