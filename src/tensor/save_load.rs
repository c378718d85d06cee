use super::Tensor;
use crate::errors::TensorError;

// 保存和加载张量
impl Tensor {
    /// 将单个Tensor编码为字节（bincode）
    pub fn to_bytes(&self) -> Result<Vec<u8>, TensorError> {
        bincode::serialize(&self.data).map_err(|e| TensorError::Serialization(e.to_string()))
    }

    /// 从字节解码单个Tensor
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TensorError> {
        let data = bincode::deserialize(bytes).map_err(|e| TensorError::Serialization(e.to_string()))?;
        Ok(Self { data })
    }
}
