use super::{LayerSpec, TraitLayer};
use crate::nn::{GraphError, ops};
use crate::tensor::Tensor;

/// 2D 最大池化层，`stride` 默认等于 `kernel_size`
#[derive(Debug, Clone)]
pub struct MaxPool2d {
    name: String,
    kernel_size: (usize, usize),
    stride: (usize, usize),
}

impl MaxPool2d {
    pub fn new(name: &str, kernel_size: (usize, usize), stride: Option<(usize, usize)>) -> Self {
        Self {
            name: name.to_string(),
            kernel_size,
            stride: stride.unwrap_or(kernel_size),
        }
    }

    pub const fn kernel_size(&self) -> (usize, usize) {
        self.kernel_size
    }

    pub const fn stride(&self) -> (usize, usize) {
        self.stride
    }
}

impl TraitLayer for MaxPool2d {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> LayerSpec {
        LayerSpec::MaxPool2d {
            kernel_size: self.kernel_size,
            stride: self.stride,
        }
    }

    fn forward(&self, input: &Tensor) -> Result<Tensor, GraphError> {
        ops::max_pool2d(input, self.kernel_size, self.stride)
    }
}
