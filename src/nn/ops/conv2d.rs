/*
 * @Author       : 老董
 * @Date         : 2025-12-22
 * @Description  : 2D 卷积（PyTorch 风格）
 *
 * - 输入: [batch, C_in, H, W]
 * - 卷积核: [C_out, C_in, kH, kW]
 * - 输出: [batch, C_out, H', W']
 *
 * H' = (H + 2*pH - kH) / sH + 1
 * W' = (W + 2*pW - kW) / sW + 1
 */

use crate::nn::GraphError;
use crate::tensor::Tensor;
use ndarray::{Array4, ArrayView4, s};

/// 推断卷积输出形状，同时完成所有形状校验
pub(crate) fn conv2d_output_shape(
    input_shape: &[usize],
    kernel_shape: &[usize],
    stride: (usize, usize),
    padding: (usize, usize),
) -> Result<Vec<usize>, GraphError> {
    if kernel_shape.len() != 4 {
        return Err(GraphError::ShapeMismatch {
            expected: vec![0, 0, 0, 0], // 占位
            got: kernel_shape.to_vec(),
            message: format!("卷积核必须是 4D [C_out, C_in, kH, kW]，得到 {kernel_shape:?}"),
        });
    }
    if input_shape.len() != 4 {
        return Err(GraphError::ShapeMismatch {
            expected: vec![0, kernel_shape[1], 0, 0], // 占位
            got: input_shape.to_vec(),
            message: format!(
                "Conv2d 输入必须是 4D [batch, C_in, H, W]，得到 {input_shape:?}。单样本请使用 [1, C_in, H, W]"
            ),
        });
    }
    if stride.0 == 0 || stride.1 == 0 {
        return Err(GraphError::UnsupportedOperation(format!(
            "卷积步长必须为正，得到 {stride:?}"
        )));
    }

    let (batch_size, input_c, input_h, input_w) =
        (input_shape[0], input_shape[1], input_shape[2], input_shape[3]);
    let (out_channels, in_channels, kernel_h, kernel_w) =
        (kernel_shape[0], kernel_shape[1], kernel_shape[2], kernel_shape[3]);

    if input_c != in_channels {
        return Err(GraphError::ShapeMismatch {
            expected: vec![in_channels],
            got: vec![input_c],
            message: format!("输入通道数 {input_c} 与卷积核输入通道数 {in_channels} 不匹配"),
        });
    }

    let padded_h = input_h + 2 * padding.0;
    let padded_w = input_w + 2 * padding.1;
    if padded_h < kernel_h || padded_w < kernel_w {
        return Err(GraphError::ShapeMismatch {
            expected: vec![kernel_h, kernel_w],
            got: vec![padded_h, padded_w],
            message: format!(
                "卷积输出尺寸无效：输入 {input_h}x{input_w}，核 {kernel_h}x{kernel_w}，填充 {padding:?}"
            ),
        });
    }

    let output_h = (padded_h - kernel_h) / stride.0 + 1;
    let output_w = (padded_w - kernel_w) / stride.1 + 1;
    Ok(vec![batch_size, out_channels, output_h, output_w])
}

/// 对输入进行零填充
fn pad_input(input: ArrayView4<'_, f64>, padding: (usize, usize)) -> Array4<f64> {
    let (pad_h, pad_w) = padding;
    if pad_h == 0 && pad_w == 0 {
        return input.to_owned();
    }

    let (batch_size, c, h, w) = input.dim();
    let mut padded = Array4::zeros((batch_size, c, h + 2 * pad_h, w + 2 * pad_w));
    padded
        .slice_mut(s![.., .., pad_h..pad_h + h, pad_w..pad_w + w])
        .assign(&input);
    padded
}

/// 执行卷积运算（不含偏置）
pub(crate) fn conv2d(
    input: &Tensor,
    kernel: &Tensor,
    stride: (usize, usize),
    padding: (usize, usize),
) -> Result<Tensor, GraphError> {
    let output_shape = conv2d_output_shape(input.shape(), kernel.shape(), stride, padding)?;
    let padded = pad_input(input.view4()?, padding);
    let kernel = kernel.view4()?;

    let (_, in_c, k_h, k_w) = kernel.dim();
    let (stride_h, stride_w) = stride;
    let mut output = Array4::<f64>::zeros((
        output_shape[0],
        output_shape[1],
        output_shape[2],
        output_shape[3],
    ));

    for ((b, oc, oh, ow), out) in output.indexed_iter_mut() {
        let h_start = oh * stride_h;
        let w_start = ow * stride_w;
        let window = padded.slice(s![b, .., h_start..h_start + k_h, w_start..w_start + k_w]);
        let filter = kernel.slice(s![oc, ..in_c, .., ..]);
        *out = (&window * &filter).sum();
    }

    Ok(Tensor::from_array(output.into_dyn()))
}

/// 按通道加偏置：输入 [batch, C, H, W]，偏置 [1, C]
pub(crate) fn channel_bias_add(input: &Tensor, bias: &Tensor) -> Result<Tensor, GraphError> {
    let input = input.view4()?;
    let channels = input.dim().1;
    if bias.shape() != [1, channels] {
        return Err(GraphError::ShapeMismatch {
            expected: vec![1, channels],
            got: bias.shape().to_vec(),
            message: "通道偏置形状必须为 [1, C]".to_string(),
        });
    }

    let bias = bias.view2()?;
    let mut output = input.to_owned();
    for ((_, c, _, _), value) in output.indexed_iter_mut() {
        *value += bias[[0, c]];
    }
    Ok(Tensor::from_array(output.into_dyn()))
}
