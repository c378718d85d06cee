/*
 * @Author       : 老董
 * @Date         : 2023-10-21 03:22:26
 * @Description  : 本类仅包含一些属性方法，不包含任何运算方法，所以不会需要用到mut
 */

use super::Tensor;
use ndarray::{Ix2, Ix4};

use crate::errors::TensorError;

impl Tensor {
    /// 以 4 阶视图访问（[batch, C, H, W]）
    pub fn view4(&self) -> Result<ndarray::ArrayView4<'_, f64>, TensorError> {
        self.data
            .view()
            .into_dimensionality::<Ix4>()
            .map_err(|_| TensorError::RankMismatch {
                expected: 4,
                shape: self.shape().to_vec(),
            })
    }

    /// 以 2 阶视图访问（[batch, features]）
    pub fn view2(&self) -> Result<ndarray::ArrayView2<'_, f64>, TensorError> {
        self.data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| TensorError::RankMismatch {
                expected: 2,
                shape: self.shape().to_vec(),
            })
    }

    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]。
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// 张量的维（dim）数、阶（rank）数
    /// 即`shape()`的元素个数--如：形状为`[]`的标量阶数为0，向量阶数为1，矩阵阶数为2，以此类推
    pub fn dimension(&self) -> usize {
        self.data.ndim()
    }

    /// 计算张量中所有元素的数量
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 判断两个张量的形状是否严格一致。如：形状为 [1, 4]，[1, 4]和[4]是不一致的，会返回false
    pub fn is_same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// 按行优先顺序返回所有元素
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// 对每个元素应用`f`，返回新张量
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_array(self.data.mapv(f))
    }
}
