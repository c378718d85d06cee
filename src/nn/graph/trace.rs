/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : 追踪（trace）：将 Network 的层列表转换为显式计算图
 *
 * 追踪时以 batch=1 做静态形状推断，任何无法表示的构造或不一致的形状
 * 都在导出阶段报错，而不会生成一个“看似正常”的错误模型文件。
 *
 * 层 → 节点映射：
 * - Conv2d    → Parameter(K) + Conv2d + Parameter(b) + ChannelBiasAdd
 * - Linear    → Parameter(W) + MatMul + Parameter(b) + Add
 * - MaxPool2d → MaxPool2d
 * - Flatten   → Flatten
 * - ReLU/Tanh → ReLU/Tanh
 */

use super::{Graph, GraphError};
use crate::nn::descriptor::{GraphDescriptor, NodeTypeDescriptor};
use crate::nn::layer::{ActivationKind, Layer, TraitLayer};
use crate::nn::{Network, ops};
use crate::tensor::Tensor;
use std::collections::HashMap;
use tracing::debug;

impl Graph {
    /// 追踪网络，得到等价的计算图
    pub fn trace(network: &Network) -> Result<Self, GraphError> {
        let mut tracer = Tracer::new(network);

        for layer in network.layers() {
            tracer.trace_layer(layer)?;
        }

        debug!(
            "追踪网络 {}：{} 层 → {} 个节点",
            network.name(),
            network.layers().len(),
            tracer.descriptor.nodes.len()
        );
        Self::from_parts(tracer.descriptor, tracer.params)
    }
}

struct Tracer {
    descriptor: GraphDescriptor,
    params: HashMap<String, Tensor>,
    /// 当前输出节点
    current: u64,
    /// 当前输出的完整形状（batch=1）
    shape: Vec<usize>,
}

impl Tracer {
    fn new(network: &Network) -> Self {
        let mut descriptor = GraphDescriptor::new(network.name());
        let current = descriptor.add_node(
            "input",
            NodeTypeDescriptor::Input,
            network.input_shape().to_vec(),
            vec![],
        );
        let mut shape = vec![1];
        shape.extend_from_slice(network.input_shape());

        Self {
            descriptor,
            params: HashMap::new(),
            current,
            shape,
        }
    }

    fn trace_layer(&mut self, layer: &Layer) -> Result<(), GraphError> {
        match layer {
            Layer::Conv2d(conv) => {
                self.require_rank(layer, 4)?;
                let next = ops::conv2d_output_shape(
                    &self.shape,
                    conv.kernel().shape(),
                    conv.stride(),
                    conv.padding(),
                )?;
                let kernel = self.add_parameter(layer, conv.kernel_name(), conv.kernel())?;
                let node_type = NodeTypeDescriptor::Conv2d {
                    stride: conv.stride(),
                    padding: conv.padding(),
                };
                self.push(conv.name(), node_type, next.clone(), vec![self.current, kernel]);
                let bias = self.add_parameter(layer, conv.bias_name(), conv.bias())?;
                self.push(
                    &format!("{}_bias_add", conv.name()),
                    NodeTypeDescriptor::ChannelBiasAdd,
                    next,
                    vec![self.current, bias],
                );
            }
            Layer::MaxPool2d(pool) => {
                self.require_rank(layer, 4)?;
                let next = ops::max_pool2d_output_shape(&self.shape, pool.kernel_size(), pool.stride())?;
                let node_type = NodeTypeDescriptor::MaxPool2d {
                    kernel_size: pool.kernel_size(),
                    stride: pool.stride(),
                };
                self.push(pool.name(), node_type, next, vec![self.current]);
            }
            Layer::Flatten(flatten) => {
                let next = ops::flatten_output_shape(&self.shape)?;
                self.push(flatten.name(), NodeTypeDescriptor::Flatten, next, vec![self.current]);
            }
            Layer::Linear(linear) => {
                self.require_rank(layer, 2)?;
                let next = ops::mat_mul_output_shape(&self.shape, linear.weights().shape())?;
                let weights = self.add_parameter(layer, linear.weights_name(), linear.weights())?;
                self.push(
                    linear.name(),
                    NodeTypeDescriptor::MatMul,
                    next.clone(),
                    vec![self.current, weights],
                );
                let bias = self.add_parameter(layer, linear.bias_name(), linear.bias())?;
                self.push(
                    &format!("{}_bias_add", linear.name()),
                    NodeTypeDescriptor::Add,
                    next,
                    vec![self.current, bias],
                );
            }
            Layer::Activation(activation) => {
                let node_type = match activation.kind() {
                    ActivationKind::ReLU => NodeTypeDescriptor::ReLU,
                    ActivationKind::Tanh => NodeTypeDescriptor::Tanh,
                };
                let shape = self.shape.clone();
                self.push(activation.name(), node_type, shape, vec![self.current]);
            }
        }
        Ok(())
    }

    /// 卷积/池化需要 4D 输入，全连接需要 2D 输入（即需先 flatten）
    fn require_rank(&self, layer: &Layer, rank: usize) -> Result<(), GraphError> {
        if self.shape.len() == rank {
            return Ok(());
        }
        Err(GraphError::UnsupportedOperation(format!(
            "层 {}（{}）要求 {rank} 维输入，但其输入形状为 {:?}{}",
            layer.name(),
            layer.spec(),
            self.shape,
            if rank == 2 { "，请先添加 Flatten 层" } else { "" }
        )))
    }

    /// 参数按名称存放，层名重复会导致参数互相覆盖，须在此拒绝
    fn add_parameter(&mut self, layer: &Layer, name: &str, value: &Tensor) -> Result<u64, GraphError> {
        if self.params.insert(name.to_string(), value.clone()).is_some() {
            return Err(GraphError::UnsupportedOperation(format!(
                "层 {}（{}）的参数 {name} 与之前的层重名，请为每个带参数的层使用不同的名称",
                layer.name(),
                layer.spec()
            )));
        }
        Ok(self.descriptor.add_node(
            name,
            NodeTypeDescriptor::Parameter,
            value.shape().to_vec(),
            vec![],
        ))
    }

    /// 添加计算节点并将其设为当前输出；`shape` 为含 batch 维的完整形状
    fn push(&mut self, name: &str, node_type: NodeTypeDescriptor, shape: Vec<usize>, parents: Vec<u64>) {
        let per_sample = shape[1..].to_vec();
        self.current = self.descriptor.add_node(name, node_type, per_sample, parents);
        self.shape = shape;
    }
}
