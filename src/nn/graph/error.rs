/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : 网络前向、计算图导出/加载的错误类型
 */

use crate::errors::TensorError;
use thiserror::Error;

/// 网络与计算图操作的错误类型
#[derive(Error, Debug)]
pub enum GraphError {
    /// 维度不匹配（如输入空间尺寸与网络固定的尺寸不一致）
    #[error("形状不匹配：期望{expected:?}，得到{got:?}。{message}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },
    /// 导出时遇到无法静态表示的构造
    #[error("无法导出的操作：{0}")]
    UnsupportedOperation(String),
    /// 模型文件内容无效（魔数、版本、拓扑或参数不符）
    #[error("无效的模型文件：{0}")]
    InvalidArtifact(String),
    #[error("张量错误：{0}")]
    Tensor(#[from] TensorError),
    #[error("图描述（反）序列化失败：{0}")]
    Json(#[from] serde_json::Error),
    #[error("模型文件读写失败：{0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// 是否为维度不匹配类错误
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            Self::ShapeMismatch { .. } | Self::Tensor(TensorError::RankMismatch { .. })
        )
    }
}
