/*
 * @Author       : 老董
 * @Date         : 2026-01-28
 * @Description  : 张量的文本展示：向量、矩阵逐行打印，高阶张量只给出概要
 */

use crate::tensor::Tensor;
use std::fmt;

fn format_row<'a>(values: impl Iterator<Item = &'a f64>) -> String {
    let cells: Vec<String> = values.map(|v| format!("{v:8.4}")).collect();
    format!("[{}]", cells.join(", "))
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self.shape();
        match shape.len() {
            0 | 1 => writeln!(f, "{}", format_row(self.data.iter()))?,
            2 => {
                let rows: Vec<String> = self
                    .data
                    .outer_iter()
                    .map(|row| format_row(row.iter()))
                    .collect();
                writeln!(f, "[{}]", rows.join(",\n "))?;
            }
            rank => writeln!(f, "<{rank} 阶张量，共 {} 个元素>", self.size())?,
        }
        write!(f, "形状: {shape:?}")
    }
}
