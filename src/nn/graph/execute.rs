/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : 计算图解释执行：按拓扑顺序逐节点求值
 */

use super::{Graph, GraphError};
use crate::nn::descriptor::{NodeDescriptor, NodeTypeDescriptor};
use crate::nn::ops;
use crate::tensor::Tensor;
use std::borrow::Cow;

impl Graph {
    /// 前向传播：输入 [batch, C, H, W]，返回输出节点的值
    ///
    /// 与 `Network::forward` 不同，这里会先校验输入的单样本形状
    pub fn forward(&self, input: &Tensor) -> Result<Tensor, GraphError> {
        let expected = self.input_shape();
        if input.dimension() != expected.len() + 1 || &input.shape()[1..] != expected {
            let mut expected_full = vec![input.shape().first().copied().unwrap_or(1)];
            expected_full.extend_from_slice(expected);
            return Err(GraphError::ShapeMismatch {
                expected: expected_full,
                got: input.shape().to_vec(),
                message: format!("计算图 {} 的单样本输入形状为 {expected:?}", self.name()),
            });
        }

        let nodes = &self.descriptor.nodes;
        let mut values: Vec<Cow<'_, Tensor>> = Vec::with_capacity(nodes.len());
        for node in nodes {
            let value = match node.node_type {
                NodeTypeDescriptor::Input => Cow::Borrowed(input),
                NodeTypeDescriptor::Parameter => {
                    Cow::Borrowed(self.params.get(&node.name).ok_or_else(|| {
                        GraphError::InvalidArtifact(format!("参数 {} 缺少数值", node.name))
                    })?)
                }
                NodeTypeDescriptor::Conv2d { stride, padding } => Cow::Owned(ops::conv2d(
                    parent(&values, node, 0),
                    parent(&values, node, 1),
                    stride,
                    padding,
                )?),
                NodeTypeDescriptor::ChannelBiasAdd => Cow::Owned(ops::channel_bias_add(
                    parent(&values, node, 0),
                    parent(&values, node, 1),
                )?),
                NodeTypeDescriptor::MaxPool2d {
                    kernel_size,
                    stride,
                } => Cow::Owned(ops::max_pool2d(
                    parent(&values, node, 0),
                    kernel_size,
                    stride,
                )?),
                NodeTypeDescriptor::Flatten => Cow::Owned(ops::flatten(parent(&values, node, 0))?),
                NodeTypeDescriptor::MatMul => Cow::Owned(ops::mat_mul(
                    parent(&values, node, 0),
                    parent(&values, node, 1),
                )?),
                NodeTypeDescriptor::Add => Cow::Owned(ops::row_bias_add(
                    parent(&values, node, 0),
                    parent(&values, node, 1),
                )?),
                NodeTypeDescriptor::ReLU => Cow::Owned(ops::relu(parent(&values, node, 0))),
                NodeTypeDescriptor::Tanh => Cow::Owned(ops::tanh(parent(&values, node, 0))),
            };
            values.push(value);
        }

        values
            .pop()
            .map(Cow::into_owned)
            .ok_or_else(|| GraphError::InvalidArtifact("计算图没有任何节点".to_string()))
    }

    /// 批量评估：每个样本是按行优先展平的单个棋盘，返回每个样本输出的首个值
    ///
    /// # 示例
    /// ```ignore
    /// let boards: Vec<Vec<f64>> = ...; // 每个长度为 H*W
    /// let refs: Vec<&[f64]> = boards.iter().map(Vec::as_slice).collect();
    /// let values = graph.evaluate_batch(&refs)?;
    /// ```
    pub fn evaluate_batch(&self, samples: &[&[f64]]) -> Result<Vec<f64>, GraphError> {
        let sample_shape = self.input_shape();
        let sample_len = sample_shape.iter().product::<usize>();
        if let Some(bad) = samples.iter().find(|s| s.len() != sample_len) {
            return Err(GraphError::ShapeMismatch {
                expected: vec![sample_len],
                got: vec![bad.len()],
                message: format!("每个样本须展平为 {sample_shape:?} 的元素个数"),
            });
        }
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        let data = samples.concat();
        let mut shape = vec![samples.len()];
        shape.extend_from_slice(sample_shape);
        let output = self.forward(&Tensor::new(&data, &shape))?;

        let batch = samples.len();
        let width = output.size() / batch;
        if width == 0 || output.shape().first() != Some(&batch) {
            return Err(GraphError::ShapeMismatch {
                expected: vec![batch, 1],
                got: output.shape().to_vec(),
                message: format!("计算图 {} 的每个样本必须至少输出一个值", self.name()),
            });
        }
        let output = output.reshape(&[batch, width])?;
        Ok(output.view2()?.column(0).to_vec())
    }
}

/// 已通过校验的图中，父节点一定先于子节点求值
fn parent<'v>(values: &'v [Cow<'_, Tensor>], node: &NodeDescriptor, index: usize) -> &'v Tensor {
    values[node.parents[index] as usize].as_ref()
}
