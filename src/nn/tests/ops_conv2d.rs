/*
 * @Author       : 老董
 * @Date         : 2025-12-22
 * @Description  : Conv2d 算子单元测试（形状推断 + 前向数值）
 */

use crate::nn::GraphError;
use crate::nn::ops::{channel_bias_add, conv2d, conv2d_output_shape};
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;

fn ones(shape: &[usize]) -> Tensor {
    Tensor::zeros(shape).map(|_| 1.0)
}

/// 测试输出形状推断
#[test]
fn test_conv2d_output_shape() -> Result<(), GraphError> {
    // H' = (6 + 2 - 3) / 1 + 1 = 6
    assert_eq!(
        conv2d_output_shape(&[5, 1, 6, 7], &[4, 1, 3, 3], (1, 1), (1, 1))?,
        vec![5, 4, 6, 7]
    );
    // H' = (8 - 2) / 1 + 1 = 7
    assert_eq!(
        conv2d_output_shape(&[2, 1, 8, 8], &[8, 1, 2, 2], (1, 1), (0, 0))?,
        vec![2, 8, 7, 7]
    );
    // 步长 2
    assert_eq!(
        conv2d_output_shape(&[1, 3, 7, 7], &[2, 3, 3, 3], (2, 2), (0, 0))?,
        vec![1, 2, 3, 3]
    );
    Ok(())
}

/// 测试通道数不匹配
#[test]
fn test_conv2d_channel_mismatch() {
    let result = conv2d_output_shape(&[1, 2, 4, 4], &[1, 1, 2, 2], (1, 1), (0, 0));
    assert!(matches!(result, Err(GraphError::ShapeMismatch { .. })));
}

/// 测试非 4D 输入
#[test]
fn test_conv2d_rank_mismatch() {
    let result = conv2d(&ones(&[4, 4]), &ones(&[1, 1, 2, 2]), (1, 1), (0, 0));
    assert!(result.unwrap_err().is_shape_mismatch());
}

/// 测试卷积核大于输入
#[test]
fn test_conv2d_kernel_too_large() {
    let result = conv2d_output_shape(&[1, 1, 2, 2], &[1, 1, 3, 3], (1, 1), (0, 0));
    assert!(matches!(result, Err(GraphError::ShapeMismatch { .. })));
}

/// 测试前向传播（简单情况）：2x2 全 1 核在全 1 输入上求和 = 4
#[test]
fn test_conv2d_forward_simple() -> Result<(), GraphError> {
    let output = conv2d(&ones(&[1, 1, 3, 3]), &ones(&[1, 1, 2, 2]), (1, 1), (0, 0))?;
    assert_eq!(output.shape(), &[1, 1, 2, 2]);
    for value in output.to_vec() {
        assert_abs_diff_eq!(value, 4.0, epsilon = 1e-12);
    }
    Ok(())
}

/// 测试前向传播（带 padding）
#[test]
fn test_conv2d_forward_with_padding() -> Result<(), GraphError> {
    let output = conv2d(&ones(&[1, 1, 3, 3]), &ones(&[1, 1, 3, 3]), (1, 1), (1, 1))?;
    assert_eq!(output.shape(), &[1, 1, 3, 3]);
    // 中心位置：3x3 窗口全部有值，sum = 9
    assert_abs_diff_eq!(output[[0, 0, 1, 1]], 9.0, epsilon = 1e-12);
    // 角落位置：只有 2x2 区域有值，sum = 4
    assert_abs_diff_eq!(output[[0, 0, 0, 0]], 4.0, epsilon = 1e-12);
    // 边缘位置：2x3 区域有值，sum = 6
    assert_abs_diff_eq!(output[[0, 0, 0, 1]], 6.0, epsilon = 1e-12);
    Ok(())
}

/// 测试前向传播（多通道、Batch）
#[test]
fn test_conv2d_forward_batch_multi_channel() -> Result<(), GraphError> {
    // 输入: [batch=2, C_in=2, 2, 2]，值为 0..16
    let input = Tensor::arange(&[2, 2, 2, 2]);
    // 卷积核: [C_out=2, C_in=2, 1, 1]
    // 输出通道 0 = 通道0 + 通道1；输出通道 1 = 通道0 - 通道1
    let kernel = Tensor::new(&[1., 1., 1., -1.], &[2, 2, 1, 1]);
    let output = conv2d(&input, &kernel, (1, 1), (0, 0))?;
    assert_eq!(output.shape(), &[2, 2, 2, 2]);

    // batch 0：通道0 = [0,1,2,3]，通道1 = [4,5,6,7]
    assert_abs_diff_eq!(output[[0, 0, 0, 0]], 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(output[[0, 1, 1, 1]], -4.0, epsilon = 1e-12);
    // batch 1：通道0 = [8..12]，通道1 = [12..16]
    assert_abs_diff_eq!(output[[1, 0, 0, 1]], 9.0 + 13.0, epsilon = 1e-12);
    Ok(())
}

/// 测试按通道加偏置
#[test]
fn test_channel_bias_add() -> Result<(), GraphError> {
    let input = Tensor::zeros(&[1, 2, 2, 2]);
    let bias = Tensor::new(&[0.5, -1.0], &[1, 2]);
    let output = channel_bias_add(&input, &bias)?;
    assert_abs_diff_eq!(output[[0, 0, 1, 1]], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(output[[0, 1, 0, 1]], -1.0, epsilon = 1e-12);

    let wrong_bias = Tensor::new(&[0.5, -1.0, 2.0], &[1, 3]);
    assert!(channel_bias_add(&input, &wrong_bias).is_err());
    Ok(())
}
