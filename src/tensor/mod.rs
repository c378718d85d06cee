/*
 * @Author       : 老董
 * @Date         : 2023-08-30 19:16:48
 * @Description  : 张量（Tensor）：基于 ndarray 的 f64 动态维度数组，
 *                 仅提供网络前向与模型导出所需的最小功能集
 */

use ndarray::{Array, IxDyn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::errors::TensorError;

mod ops {
    pub mod index;
}

mod print;
mod property;
mod save_load;
mod shape;


/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 注：只要通Tensor初始化的都是张量（即使标量也是张量）；
/// 而通常意义上的数字（类型为usize、i32、f64等）就只是纯数（number），在这里不被认为是张量。
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Array<f64, IxDyn>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`可以是[]、[1]、[1,1]、[1,1,1]...
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]；
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则会panic。
    pub fn new(data: &[f64], shape: &[usize]) -> Self {
        let expected = shape.iter().product::<usize>();
        assert!(
            data.len() == expected,
            "{}",
            TensorError::DataLengthMismatch {
                data_len: data.len(),
                shape: shape.to_vec(),
                expected,
            }
        );
        let data = Array::from_shape_vec(IxDyn(shape), data.to_vec()).unwrap();
        Self { data }
    }

    /// 创建全零张量
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// 以整数序列`0, 1, ..., n-1`（转为双精度）创建形状为`shape`的张量，
    /// `n`即`shape`中所有元素的乘积。用于构造确定性的冒烟测试输入。
    pub fn arange(shape: &[usize]) -> Self {
        let n = shape.iter().product::<usize>();
        let data = (0..n).map(|i| i as f64).collect::<Vec<_>>();
        Self::new(&data, shape)
    }

    /// 使用指定的 RNG 创建服从正态分布的随机张量（Box-Muller 变换）
    pub fn normal_with_rng(mean: f64, std_dev: f64, shape: &[usize], rng: &mut StdRng) -> Self {
        let data_len = shape.iter().product::<usize>();
        let mut data = Vec::with_capacity(data_len);

        while data.len() < data_len {
            let u1: f64 = rng.r#gen();
            let u2: f64 = rng.r#gen();
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f64::consts::PI * u2;
            let z0 = mean + std_dev * r * theta.cos();
            let z1 = mean + std_dev * r * theta.sin();

            if z0.is_finite() {
                data.push(z0);
            }
            if data.len() < data_len && z1.is_finite() {
                data.push(z1);
            }
        }

        Self::new(&data, shape)
    }

    /// 由 ndarray 数组直接构造（仅供 crate 内部的算子使用）
    pub(crate) fn from_array(data: Array<f64, IxDyn>) -> Self {
        Self { data }
    }
}
