use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    #[error("数据长度{data_len}与形状{shape:?}所需的元素个数{expected}不一致")]
    DataLengthMismatch {
        data_len: usize,
        shape: Vec<usize>,
        expected: usize,
    },
    #[error("张量形状不兼容：无法将形状{from:?}变换为{to:?}")]
    IncompatibleShape { from: Vec<usize>, to: Vec<usize> },
    #[error("张量阶数不符：期望{expected}阶，得到形状{shape:?}")]
    RankMismatch { expected: usize, shape: Vec<usize> },
    #[error("张量（反）序列化失败：{0}")]
    Serialization(String),
}
