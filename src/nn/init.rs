/*
 * @Author       : 老董
 * @Date         : 2026-01-17
 * @Description  : 参数初始化策略（始终使用显式种子的 RNG，保证可复现）
 */

use crate::tensor::Tensor;
use rand::rngs::StdRng;

/// 未显式指定时使用的初始化种子
pub const DEFAULT_SEED: u64 = 42;

/// 参数初始化策略：权重用 Kaiming，偏置用全零
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Init {
    Zeros,
    /// Kaiming/He 正态初始化（适用于 `ReLU`），std = sqrt(2 / fan_in)
    Kaiming,
}

impl Init {
    /// 使用指定的 RNG 生成初始化后的 Tensor
    pub fn generate_with_rng(&self, shape: &[usize], rng: &mut StdRng) -> Tensor {
        match self {
            Self::Zeros => Tensor::zeros(shape),
            Self::Kaiming => {
                let std = (2.0 / fan_in(shape) as f64).sqrt();
                Tensor::normal_with_rng(0.0, std, shape, rng)
            }
        }
    }
}

/// 输入扇入：全连接权重 [in, out] 取 in；卷积核 [C_out, C_in, kH, kW] 取 C_in*kH*kW
fn fan_in(shape: &[usize]) -> usize {
    let n: usize = match shape.len() {
        4 => shape[1..].iter().product(),
        _ => shape.first().copied().unwrap_or(1),
    };
    n.max(1)
}
