/*
 * @Author       : 老董
 * @Date         : 2025-12-22
 * @Description  : Layer 模块：网络由有序的层列表组成，每层都是不可变的记录
 *                 （层类型 + 固定的形状超参数 + 已初始化的参数），
 *                 前向传播即对层列表的一次纯折叠（fold）。
 */

mod activation;
mod conv2d;
mod flatten;
mod linear;
mod max_pool2d;

pub use activation::{Activation, ActivationKind};
pub use conv2d::Conv2d;
pub use flatten::Flatten;
pub use linear::Linear;
pub use max_pool2d::MaxPool2d;

use crate::nn::GraphError;
use crate::tensor::Tensor;
use enum_dispatch::enum_dispatch;
use std::fmt;

/// 层描述符：层类型及其固定的形状超参数（不含参数值）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerSpec {
    Conv2d {
        in_channels: usize,
        out_channels: usize,
        kernel_size: (usize, usize),
        stride: (usize, usize),
        padding: (usize, usize),
    },
    MaxPool2d {
        kernel_size: (usize, usize),
        stride: (usize, usize),
    },
    Flatten,
    Linear {
        in_features: usize,
        out_features: usize,
    },
    ReLU,
    Tanh,
}

impl fmt::Display for LayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conv2d {
                in_channels,
                out_channels,
                kernel_size,
                stride,
                padding,
            } => write!(
                f,
                "Conv2d({in_channels}→{out_channels}, kernel={kernel_size:?}, stride={stride:?}, padding={padding:?})"
            ),
            Self::MaxPool2d {
                kernel_size,
                stride,
            } => write!(f, "MaxPool2d(kernel={kernel_size:?}, stride={stride:?})"),
            Self::Flatten => write!(f, "Flatten"),
            Self::Linear {
                in_features,
                out_features,
            } => write!(f, "Linear({in_features}→{out_features})"),
            Self::ReLU => write!(f, "ReLU"),
            Self::Tanh => write!(f, "Tanh"),
        }
    }
}

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Layer {
    Conv2d,
    MaxPool2d,
    Flatten,
    Linear,
    Activation,
}

#[enum_dispatch(Layer)]
pub trait TraitLayer {
    fn name(&self) -> &str;

    fn spec(&self) -> LayerSpec;

    /// 对一个 batch 执行本层计算，不修改任何状态
    fn forward(&self, input: &Tensor) -> Result<Tensor, GraphError>;

    /// 本层参数（名称, 值），无参数的层返回空列表
    fn parameters(&self) -> Vec<(&str, &Tensor)> {
        Vec::new()
    }
}
