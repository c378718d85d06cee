use crate::tensor::Tensor;

pub(crate) fn relu(input: &Tensor) -> Tensor {
    input.map(|x| x.max(0.))
}

pub(crate) fn tanh(input: &Tensor) -> Tensor {
    input.map(f64::tanh)
}
