/*
 * @Author       : 老董
 * @Date         : 2025-12-22
 * @Description  : 纯函数式算子：网络层（`Network`）与计算图执行器（`Graph`）共用同一套实现，
 *                 保证两条前向路径的数值完全一致。
 *
 * 形状约定（Batch-First）：
 * - 卷积/池化：[batch, C, H, W]
 * - 全连接：[batch, features]
 */

mod activation;
mod conv2d;
mod flatten;
mod mat_mul;
mod max_pool2d;

pub(crate) use activation::{relu, tanh};
pub(crate) use conv2d::{channel_bias_add, conv2d, conv2d_output_shape};
pub(crate) use flatten::{flatten, flatten_output_shape};
pub(crate) use mat_mul::{mat_mul, mat_mul_output_shape, row_bias_add};
pub(crate) use max_pool2d::{max_pool2d, max_pool2d_output_shape};
