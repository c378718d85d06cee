/*
 * @Author       : 老董
 * @Date         : 2026-01-17
 * @Description  : Network：固定拓扑的前馈网络
 *
 * 网络构建完成后不可变；前向传播是对层列表的纯折叠，
 * 不做任何预先的形状校验。输入空间尺寸不符时会在第一个全连接层
 * 报告维度不匹配，而不会被截断或填充。
 */

use crate::nn::layer::{
    Activation, ActivationKind, Conv2d, Flatten, Layer, LayerSpec, Linear, MaxPool2d, TraitLayer,
};
use crate::nn::{DEFAULT_SEED, GraphError};
use crate::tensor::Tensor;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 固定拓扑的前馈网络
#[derive(Debug, Clone)]
pub struct Network {
    name: String,
    /// 单样本输入形状 [C, H, W]（不含 batch 维）
    input_shape: Vec<usize>,
    layers: Vec<Layer>,
    seed: u64,
}

impl Network {
    /// 创建网络构建器
    ///
    /// # 示例
    /// ```ignore
    /// let net = Network::builder("demo", &[1, 6, 7])
    ///     .conv2d("conv1", 1, 4, (3, 3), (1, 1))
    ///     .relu()
    ///     .flatten()
    ///     .linear("fc1", 4 * 6 * 7, 1)
    ///     .build();
    /// ```
    pub fn builder(name: &str, input_shape: &[usize]) -> NetworkBuilder {
        NetworkBuilder::new(name, input_shape)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_shape(&self) -> &[usize] {
        &self.input_shape
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// 各层描述符（按前向顺序）
    pub fn specs(&self) -> Vec<LayerSpec> {
        self.layers.iter().map(TraitLayer::spec).collect()
    }

    /// 可训练参数总量
    pub fn parameter_count(&self) -> usize {
        self.layers
            .iter()
            .flat_map(TraitLayer::parameters)
            .map(|(_, tensor)| tensor.size())
            .sum()
    }

    /// 前向传播：输入 [batch, C, H, W]，输出 [batch, 1]（对本仓库中的预设网络而言）
    pub fn forward(&self, input: &Tensor) -> Result<Tensor, GraphError> {
        self.layers
            .iter()
            .try_fold(input.clone(), |hidden, layer| layer.forward(&hidden))
    }
}

/// `Network` 的构建器，参数初始化使用显式种子
pub struct NetworkBuilder {
    name: String,
    input_shape: Vec<usize>,
    layers: Vec<Layer>,
    seed: u64,
    rng: StdRng,
}

impl NetworkBuilder {
    fn new(name: &str, input_shape: &[usize]) -> Self {
        Self {
            name: name.to_string(),
            input_shape: input_shape.to_vec(),
            layers: Vec::new(),
            seed: DEFAULT_SEED,
            rng: StdRng::seed_from_u64(DEFAULT_SEED),
        }
    }

    /// 设置初始化种子。须在添加任何带参数的层之前调用，才能影响其初始值
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// 步长为 1 的卷积层
    pub fn conv2d(
        self,
        name: &str,
        in_channels: usize,
        out_channels: usize,
        kernel_size: (usize, usize),
        padding: (usize, usize),
    ) -> Self {
        self.conv2d_strided(name, in_channels, out_channels, kernel_size, (1, 1), padding)
    }

    pub fn conv2d_strided(
        mut self,
        name: &str,
        in_channels: usize,
        out_channels: usize,
        kernel_size: (usize, usize),
        stride: (usize, usize),
        padding: (usize, usize),
    ) -> Self {
        let layer = Conv2d::new_with_rng(
            name,
            in_channels,
            out_channels,
            kernel_size,
            stride,
            padding,
            &mut self.rng,
        );
        self.layers.push(layer.into());
        self
    }

    pub fn max_pool2d(mut self, kernel_size: (usize, usize)) -> Self {
        let name = self.auto_name("pool");
        self.layers.push(MaxPool2d::new(&name, kernel_size, None).into());
        self
    }

    pub fn flatten(mut self) -> Self {
        let name = self.auto_name("flatten");
        self.layers.push(Flatten::new(&name).into());
        self
    }

    pub fn linear(mut self, name: &str, in_features: usize, out_features: usize) -> Self {
        let layer = Linear::new_with_rng(name, in_features, out_features, &mut self.rng);
        self.layers.push(layer.into());
        self
    }

    pub fn relu(self) -> Self {
        self.activation(ActivationKind::ReLU)
    }

    pub fn tanh(self) -> Self {
        self.activation(ActivationKind::Tanh)
    }

    fn activation(mut self, kind: ActivationKind) -> Self {
        let prefix = match kind {
            ActivationKind::ReLU => "relu",
            ActivationKind::Tanh => "tanh",
        };
        let name = self.auto_name(prefix);
        self.layers.push(Activation::new(&name, kind).into());
        self
    }

    /// 无参数层按其在网络中的位置命名，如 `relu_1`
    fn auto_name(&self, prefix: &str) -> String {
        format!("{prefix}_{}", self.layers.len())
    }

    pub fn build(self) -> Network {
        Network {
            name: self.name,
            input_shape: self.input_shape,
            layers: self.layers,
            seed: self.seed,
        }
    }
}
