/*
 * @Author       : 老董
 * @Date         : 2024-01-31 20:23:53
 * @Description  : 负责神经网络（neural network）的构建、前向传播与计算图导出
 */

mod descriptor;
mod graph;
mod init;
pub mod layer;
mod network;
mod ops;
pub mod zoo;

pub use descriptor::{GraphDescriptor, NodeDescriptor, NodeTypeDescriptor};
pub use graph::{Graph, GraphError};
pub use init::{DEFAULT_SEED, Init};
pub use layer::{Layer, LayerSpec, TraitLayer};
pub use network::{Network, NetworkBuilder};

#[cfg(test)]
mod tests;
