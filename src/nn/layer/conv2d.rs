/*
 * @Author       : 老董
 * @Date         : 2025-12-22
 * @Description  : Conv2d (2D 卷积) 层
 *
 * 输入/输出形状：
 * - 输入：[batch_size, in_channels, H, W]
 * - 输出：[batch_size, out_channels, H', W']
 *
 * 计算：output = conv2d(x, K) + b
 */

use super::{LayerSpec, TraitLayer};
use crate::nn::{GraphError, Init, ops};
use crate::tensor::Tensor;
use rand::rngs::StdRng;

#[derive(Debug, Clone)]
pub struct Conv2d {
    name: String,
    kernel_name: String,
    bias_name: String,
    /// 卷积核参数 [out_channels, in_channels, kernel_h, kernel_w]
    kernel: Tensor,
    /// 偏置参数 [1, out_channels]
    bias: Tensor,
    stride: (usize, usize),
    padding: (usize, usize),
}

impl Conv2d {
    /// 创建新的 Conv2d 层：卷积核 Kaiming 初始化，偏置零初始化
    pub fn new_with_rng(
        name: &str,
        in_channels: usize,
        out_channels: usize,
        kernel_size: (usize, usize),
        stride: (usize, usize),
        padding: (usize, usize),
        rng: &mut StdRng,
    ) -> Self {
        let (k_h, k_w) = kernel_size;
        let kernel = Init::Kaiming.generate_with_rng(&[out_channels, in_channels, k_h, k_w], rng);
        let bias = Init::Zeros.generate_with_rng(&[1, out_channels], rng);
        Self {
            name: name.to_string(),
            kernel_name: format!("{name}_K"),
            bias_name: format!("{name}_b"),
            kernel,
            bias,
            stride,
            padding,
        }
    }

    pub const fn kernel(&self) -> &Tensor {
        &self.kernel
    }

    pub const fn bias(&self) -> &Tensor {
        &self.bias
    }

    pub fn kernel_name(&self) -> &str {
        &self.kernel_name
    }

    pub fn bias_name(&self) -> &str {
        &self.bias_name
    }

    pub const fn stride(&self) -> (usize, usize) {
        self.stride
    }

    pub const fn padding(&self) -> (usize, usize) {
        self.padding
    }
}

impl TraitLayer for Conv2d {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> LayerSpec {
        let shape = self.kernel.shape();
        LayerSpec::Conv2d {
            in_channels: shape[1],
            out_channels: shape[0],
            kernel_size: (shape[2], shape[3]),
            stride: self.stride,
            padding: self.padding,
        }
    }

    fn forward(&self, input: &Tensor) -> Result<Tensor, GraphError> {
        let output = ops::conv2d(input, &self.kernel, self.stride, self.padding)?;
        ops::channel_bias_add(&output, &self.bias)
    }

    fn parameters(&self) -> Vec<(&str, &Tensor)> {
        vec![
            (self.kernel_name.as_str(), &self.kernel),
            (self.bias_name.as_str(), &self.bias),
        ]
    }
}
