/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : 计算图（Graph）：由 `Network` 追踪得到的显式有向无环图，
 *                 独立于 `Network` 即可执行、导出与加载
 *
 * 模块划分：
 * - trace.rs：Network → Graph（含静态形状推断）
 * - execute.rs：图解释执行（前向传播、批量评估）
 * - describe.rs：模型摘要
 * - serialization.rs：底层参数二进制读写
 * - model_io.rs：高层模型文件 I/O（save/load）
 */

mod describe;
mod error;
mod execute;
mod model_io;
mod serialization;
mod trace;

pub use error::GraphError;

use crate::nn::descriptor::{GraphDescriptor, NodeTypeDescriptor};
use crate::tensor::Tensor;
use std::collections::HashMap;

/// 可独立执行与导出的计算图
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    descriptor: GraphDescriptor,
    /// Parameter 节点名称 → 参数值
    params: HashMap<String, Tensor>,
}

impl Graph {
    /// 由描述符与参数组装计算图，并校验其完整性
    pub fn from_parts(
        descriptor: GraphDescriptor,
        params: HashMap<String, Tensor>,
    ) -> Result<Self, GraphError> {
        let graph = Self { descriptor, params };
        graph.validate()?;
        Ok(graph)
    }

    pub const fn descriptor(&self) -> &GraphDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// 单样本输入形状（不含 batch 维）
    pub fn input_shape(&self) -> &[usize] {
        &self.descriptor.nodes[0].output_shape
    }

    /// 输出形状（不含 batch 维）
    pub fn output_shape(&self) -> &[usize] {
        self.descriptor
            .nodes
            .last()
            .map_or(&[][..], |node| node.output_shape.as_slice())
    }

    pub fn parameter(&self, name: &str) -> Option<&Tensor> {
        self.params.get(name)
    }

    /// 校验：
    /// 1. 首个节点是唯一的 Input 节点；
    /// 2. 节点 ID 与下标一致，父节点均在自身之前（保证无环）且数量与类型相符；
    /// 3. 每个 Parameter 节点都有形状一致的参数值，记录的参数量等于形状之积，且没有多余参数；
    /// 4. 输出节点不是 Parameter 节点。
    fn validate(&self) -> Result<(), GraphError> {
        let nodes = &self.descriptor.nodes;
        match nodes.first() {
            Some(node) if node.node_type == NodeTypeDescriptor::Input => {}
            _ => {
                return Err(GraphError::InvalidArtifact(
                    "首个节点必须是 Input 节点".to_string(),
                ));
            }
        }

        for (index, node) in nodes.iter().enumerate() {
            if node.id != index as u64 {
                return Err(GraphError::InvalidArtifact(format!(
                    "节点 {} 的 ID {} 与其位置 {index} 不一致",
                    node.name, node.id
                )));
            }
            if index > 0 && node.node_type == NodeTypeDescriptor::Input {
                return Err(GraphError::InvalidArtifact(format!(
                    "出现多余的 Input 节点 {}",
                    node.name
                )));
            }
            if node.parents.len() != node.node_type.arity() {
                return Err(GraphError::InvalidArtifact(format!(
                    "{} 节点 {} 需要 {} 个父节点，实际有 {} 个",
                    node.node_type.type_name(),
                    node.name,
                    node.node_type.arity(),
                    node.parents.len()
                )));
            }
            if let Some(&parent) = node.parents.iter().find(|&&p| p >= node.id) {
                return Err(GraphError::InvalidArtifact(format!(
                    "节点 {} 的父节点 {parent} 不在其之前，图不是拓扑有序的",
                    node.name
                )));
            }
            let expected_count = (node.node_type == NodeTypeDescriptor::Parameter)
                .then(|| node.output_shape.iter().product::<usize>());
            if node.param_count != expected_count {
                return Err(GraphError::InvalidArtifact(format!(
                    "节点 {} 记录的参数量 {:?} 与其形状 {:?} 不符",
                    node.name, node.param_count, node.output_shape
                )));
            }
            if node.node_type == NodeTypeDescriptor::Parameter {
                let value = self.params.get(&node.name).ok_or_else(|| {
                    GraphError::InvalidArtifact(format!("参数 {} 缺少数值", node.name))
                })?;
                if value.shape() != node.output_shape.as_slice() {
                    return Err(GraphError::InvalidArtifact(format!(
                        "参数 {} 的形状 {:?} 与声明的 {:?} 不一致",
                        node.name,
                        value.shape(),
                        node.output_shape
                    )));
                }
            }
        }

        let param_nodes = nodes
            .iter()
            .filter(|node| node.node_type == NodeTypeDescriptor::Parameter)
            .count();
        if param_nodes != self.params.len() {
            return Err(GraphError::InvalidArtifact(format!(
                "参数数量 {} 与 Parameter 节点数量 {param_nodes} 不一致",
                self.params.len()
            )));
        }

        if nodes.last().map(|node| node.node_type) == Some(NodeTypeDescriptor::Parameter) {
            return Err(GraphError::InvalidArtifact(
                "输出节点不能是 Parameter 节点".to_string(),
            ));
        }

        Ok(())
    }
}
