/*
 * @Author       : 老董
 * @Date         : 2026-01-17
 * @Description  : 全连接层所需的矩阵乘法与行偏置：output = x @ W + b
 *
 * - x: [batch, in_features]
 * - W: [in_features, out_features]
 * - b: [1, out_features]
 */

use crate::nn::GraphError;
use crate::tensor::Tensor;

pub(crate) fn mat_mul_output_shape(
    input_shape: &[usize],
    weights_shape: &[usize],
) -> Result<Vec<usize>, GraphError> {
    if weights_shape.len() != 2 {
        return Err(GraphError::ShapeMismatch {
            expected: vec![0, 0], // 占位
            got: weights_shape.to_vec(),
            message: "权重必须是 2D [in_features, out_features]".to_string(),
        });
    }
    let (in_features, out_features) = (weights_shape[0], weights_shape[1]);
    if input_shape.len() != 2 || input_shape[1] != in_features {
        let batch_size = input_shape.first().copied().unwrap_or(1);
        return Err(GraphError::ShapeMismatch {
            expected: vec![batch_size, in_features],
            got: input_shape.to_vec(),
            message: format!(
                "全连接层期望每个样本有 {in_features} 个输入特征，请检查输入的空间尺寸是否与网络一致"
            ),
        });
    }
    Ok(vec![input_shape[0], out_features])
}

pub(crate) fn mat_mul(input: &Tensor, weights: &Tensor) -> Result<Tensor, GraphError> {
    mat_mul_output_shape(input.shape(), weights.shape())?;
    let output = input.view2()?.dot(&weights.view2()?);
    Ok(Tensor::from_array(output.into_dyn()))
}

/// 按行广播加偏置
pub(crate) fn row_bias_add(input: &Tensor, bias: &Tensor) -> Result<Tensor, GraphError> {
    let input = input.view2()?;
    let out_features = input.dim().1;
    if bias.shape() != [1, out_features] {
        return Err(GraphError::ShapeMismatch {
            expected: vec![1, out_features],
            got: bias.shape().to_vec(),
            message: "偏置形状必须为 [1, out_features]".to_string(),
        });
    }
    let output = &input + &bias.view2()?;
    Ok(Tensor::from_array(output.into_dyn()))
}
