use super::{LayerSpec, TraitLayer};
use crate::nn::{GraphError, ops};
use crate::tensor::Tensor;

#[derive(Debug, Clone)]
pub struct Flatten {
    name: String,
}

impl Flatten {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl TraitLayer for Flatten {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> LayerSpec {
        LayerSpec::Flatten
    }

    fn forward(&self, input: &Tensor) -> Result<Tensor, GraphError> {
        ops::flatten(input)
    }
}
