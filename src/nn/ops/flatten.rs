use crate::nn::GraphError;
use crate::tensor::Tensor;

/// 保留 batch 维，其余维度展平：[batch, d1, d2, ...] -> [batch, d1*d2*...]
pub(crate) fn flatten_output_shape(input_shape: &[usize]) -> Result<Vec<usize>, GraphError> {
    match input_shape.split_first() {
        Some((&batch_size, rest)) if !rest.is_empty() => {
            Ok(vec![batch_size, rest.iter().product()])
        }
        _ => Err(GraphError::ShapeMismatch {
            expected: vec![0, 0], // 占位
            got: input_shape.to_vec(),
            message: "Flatten 输入至少需要 2 维 [batch, ...]".to_string(),
        }),
    }
}

pub(crate) fn flatten(input: &Tensor) -> Result<Tensor, GraphError> {
    let output_shape = flatten_output_shape(input.shape())?;
    Ok(input.reshape(&output_shape)?)
}
