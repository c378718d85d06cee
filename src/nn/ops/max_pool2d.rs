/*
 * @Author       : 老董
 * @Date         : 2025-12-22
 * @Description  : 2D 最大池化（PyTorch 风格，向下取整，不填充）
 */

use crate::nn::GraphError;
use crate::tensor::Tensor;
use ndarray::{Array4, s};

pub(crate) fn max_pool2d_output_shape(
    input_shape: &[usize],
    kernel_size: (usize, usize),
    stride: (usize, usize),
) -> Result<Vec<usize>, GraphError> {
    if input_shape.len() != 4 {
        return Err(GraphError::ShapeMismatch {
            expected: vec![0, 0, 0, 0], // 占位
            got: input_shape.to_vec(),
            message: format!("MaxPool2d 输入必须是 4D [batch, C, H, W]，得到 {input_shape:?}"),
        });
    }
    let (k_h, k_w) = kernel_size;
    let (s_h, s_w) = stride;
    if k_h == 0 || k_w == 0 || s_h == 0 || s_w == 0 {
        return Err(GraphError::UnsupportedOperation(format!(
            "池化窗口与步长必须为正，得到 kernel={kernel_size:?}, stride={stride:?}"
        )));
    }

    let (in_h, in_w) = (input_shape[2], input_shape[3]);
    if in_h < k_h || in_w < k_w {
        return Err(GraphError::ShapeMismatch {
            expected: vec![k_h, k_w],
            got: vec![in_h, in_w],
            message: "池化窗口大于输入尺寸".to_string(),
        });
    }

    Ok(vec![
        input_shape[0],
        input_shape[1],
        (in_h - k_h) / s_h + 1,
        (in_w - k_w) / s_w + 1,
    ])
}

pub(crate) fn max_pool2d(
    input: &Tensor,
    kernel_size: (usize, usize),
    stride: (usize, usize),
) -> Result<Tensor, GraphError> {
    let output_shape = max_pool2d_output_shape(input.shape(), kernel_size, stride)?;
    let input = input.view4()?;
    let (k_h, k_w) = kernel_size;
    let (s_h, s_w) = stride;

    let mut output = Array4::<f64>::zeros((
        output_shape[0],
        output_shape[1],
        output_shape[2],
        output_shape[3],
    ));
    for ((b, c, oh, ow), out) in output.indexed_iter_mut() {
        let h_start = oh * s_h;
        let w_start = ow * s_w;
        *out = input
            .slice(s![b, c, h_start..h_start + k_h, w_start..w_start + k_w])
            .fold(f64::NEG_INFINITY, |max, &x| max.max(x));
    }

    Ok(Tensor::from_array(output.into_dyn()))
}
