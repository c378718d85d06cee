//! # evalnet
//!
//! 用纯rust构建棋盘评估用的小型卷积网络：以固定种子初始化参数、对合成输入做一次冒烟前向、
//! 并将网络导出为自描述的计算图文件（可独立于构建代码重新加载与执行）；
//! 另附一个将 JSON 分数序列（可选滑动平均）绘制为折线图的小工具。
//!

pub mod errors;
pub mod nn;
pub mod score;
pub mod tensor;
pub mod utils;
