/*
 * @Author       : 老董
 * @Date         : 2025-12-27
 * @Description  : 图描述符（Graph Descriptor）
 *                 统一的中间表示（IR），用于导出、加载和摘要输出
 */

use serde::{Deserialize, Serialize};

/// 图的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescriptor {
    /// 生成该描述的 crate 版本
    pub version: String,
    /// 图名称
    pub name: String,
    /// 所有节点描述（按拓扑顺序，`id` 即下标）
    pub nodes: Vec<NodeDescriptor>,
}

/// 节点描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// 节点 ID
    pub id: u64,
    /// 节点名称
    pub name: String,
    /// 节点类型
    pub node_type: NodeTypeDescriptor,
    /// 输出形状。计算节点不含 batch 维；Parameter 节点即参数本身的完整形状
    pub output_shape: Vec<usize>,
    /// 父节点 ID 列表（定义拓扑）
    pub parents: Vec<u64>,
    /// 参数数量（仅 Parameter 类型有意义）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_count: Option<usize>,
}

/// 节点类型描述（包含类型特定参数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeTypeDescriptor {
    Input,
    Parameter,
    Conv2d {
        stride: (usize, usize),
        padding: (usize, usize),
    },
    ChannelBiasAdd,
    MaxPool2d {
        kernel_size: (usize, usize),
        stride: (usize, usize),
    },
    Flatten,
    MatMul,
    Add,
    ReLU,
    Tanh,
}

impl NodeTypeDescriptor {
    /// 该类型节点应有的父节点数
    pub const fn arity(&self) -> usize {
        match self {
            Self::Input | Self::Parameter => 0,
            Self::MaxPool2d { .. } | Self::Flatten | Self::ReLU | Self::Tanh => 1,
            Self::Conv2d { .. } | Self::ChannelBiasAdd | Self::MatMul | Self::Add => 2,
        }
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Parameter => "Parameter",
            Self::Conv2d { .. } => "Conv2d",
            Self::ChannelBiasAdd => "ChannelBiasAdd",
            Self::MaxPool2d { .. } => "MaxPool2d",
            Self::Flatten => "Flatten",
            Self::MatMul => "MatMul",
            Self::Add => "Add",
            Self::ReLU => "ReLU",
            Self::Tanh => "Tanh",
        }
    }
}

impl GraphDescriptor {
    /// 创建新的图描述符
    pub fn new(name: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: name.to_string(),
            nodes: Vec::new(),
        }
    }

    /// 添加节点描述，返回其 ID
    pub fn add_node(
        &mut self,
        name: &str,
        node_type: NodeTypeDescriptor,
        output_shape: Vec<usize>,
        parents: Vec<u64>,
    ) -> u64 {
        let id = self.nodes.len() as u64;
        self.nodes
            .push(NodeDescriptor::new(id, name, node_type, output_shape, parents));
        id
    }

    /// 获取总参数量
    pub fn total_params(&self) -> usize {
        self.nodes.iter().filter_map(|n| n.param_count).sum()
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl NodeDescriptor {
    /// 创建新的节点描述
    pub fn new(
        id: u64,
        name: &str,
        node_type: NodeTypeDescriptor,
        output_shape: Vec<usize>,
        parents: Vec<u64>,
    ) -> Self {
        let param_count = if matches!(node_type, NodeTypeDescriptor::Parameter) {
            Some(output_shape.iter().product())
        } else {
            None
        };

        Self {
            id,
            name: name.to_string(),
            node_type,
            output_shape,
            parents,
            param_count,
        }
    }
}
