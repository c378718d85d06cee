/*
 * @Author       : 老董
 * @Date         : 2026-01-17
 * @Description  : Linear (全连接) 层：output = x @ W + b
 */

use super::{LayerSpec, TraitLayer};
use crate::nn::{GraphError, Init, ops};
use crate::tensor::Tensor;
use rand::rngs::StdRng;

/// # 输入/输出形状
/// - 输入：[batch_size, in_features]
/// - 输出：[batch_size, out_features]
#[derive(Debug, Clone)]
pub struct Linear {
    name: String,
    weights_name: String,
    bias_name: String,
    /// 权重参数 [in_features, out_features]
    weights: Tensor,
    /// 偏置参数 [1, out_features]
    bias: Tensor,
}

impl Linear {
    /// 创建新的 Linear 层：权重 Kaiming 初始化（适合 ReLU），偏置零初始化
    pub fn new_with_rng(
        name: &str,
        in_features: usize,
        out_features: usize,
        rng: &mut StdRng,
    ) -> Self {
        let weights = Init::Kaiming.generate_with_rng(&[in_features, out_features], rng);
        let bias = Init::Zeros.generate_with_rng(&[1, out_features], rng);
        Self {
            name: name.to_string(),
            weights_name: format!("{name}_W"),
            bias_name: format!("{name}_b"),
            weights,
            bias,
        }
    }

    pub const fn weights(&self) -> &Tensor {
        &self.weights
    }

    pub const fn bias(&self) -> &Tensor {
        &self.bias
    }

    pub fn weights_name(&self) -> &str {
        &self.weights_name
    }

    pub fn bias_name(&self) -> &str {
        &self.bias_name
    }
}

impl TraitLayer for Linear {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> LayerSpec {
        let shape = self.weights.shape();
        LayerSpec::Linear {
            in_features: shape[0],
            out_features: shape[1],
        }
    }

    fn forward(&self, input: &Tensor) -> Result<Tensor, GraphError> {
        let output = ops::mat_mul(input, &self.weights)?;
        ops::row_bias_add(&output, &self.bias)
    }

    fn parameters(&self) -> Vec<(&str, &Tensor)> {
        vec![
            (self.weights_name.as_str(), &self.weights),
            (self.bias_name.as_str(), &self.bias),
        ]
    }
}
