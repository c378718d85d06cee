use super::{LayerSpec, TraitLayer};
use crate::nn::{GraphError, ops};
use crate::tensor::Tensor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKind {
    ReLU,
    Tanh,
}

/// 逐元素激活层
#[derive(Debug, Clone)]
pub struct Activation {
    name: String,
    kind: ActivationKind,
}

impl Activation {
    pub fn new(name: &str, kind: ActivationKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }

    pub const fn kind(&self) -> ActivationKind {
        self.kind
    }
}

impl TraitLayer for Activation {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> LayerSpec {
        match self.kind {
            ActivationKind::ReLU => LayerSpec::ReLU,
            ActivationKind::Tanh => LayerSpec::Tanh,
        }
    }

    fn forward(&self, input: &Tensor) -> Result<Tensor, GraphError> {
        Ok(match self.kind {
            ActivationKind::ReLU => ops::relu(input),
            ActivationKind::Tanh => ops::tanh(input),
        })
    }
}
