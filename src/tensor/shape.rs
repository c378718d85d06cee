use super::Tensor;
use crate::errors::TensorError;

impl Tensor {
    /// 变换形状，元素总数必须保持不变
    pub fn reshape(&self, shape: &[usize]) -> Result<Self, TensorError> {
        let new_total_elements: usize = shape.iter().product();
        if self.size() != new_total_elements {
            return Err(TensorError::IncompatibleShape {
                from: self.shape().to_vec(),
                to: shape.to_vec(),
            });
        }
        let data = self.data.iter().copied().collect::<Vec<_>>();
        Ok(Self::new(&data, shape))
    }

    /// 将多个形状一致的张量沿新的首维度堆叠，如 n 个 [C, H, W] 堆叠为 [n, C, H, W]
    pub fn stack(tensors: &[&Self]) -> Result<Self, TensorError> {
        let Some(first) = tensors.first() else {
            return Err(TensorError::IncompatibleShape {
                from: vec![],
                to: vec![],
            });
        };
        if let Some(odd) = tensors.iter().find(|t| !t.is_same_shape(first)) {
            return Err(TensorError::IncompatibleShape {
                from: odd.shape().to_vec(),
                to: first.shape().to_vec(),
            });
        }

        let data = tensors
            .iter()
            .flat_map(|t| t.data.iter().copied())
            .collect::<Vec<_>>();
        let mut shape = first.shape().to_vec();
        shape.insert(0, tensors.len());
        Ok(Self::new(&data, &shape))
    }
}
