/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : Graph 摘要（summary）相关方法
 */

use super::Graph;
use crate::nn::descriptor::GraphDescriptor;

impl Graph {
    /// 打印模型摘要
    pub fn summary(&self) {
        println!("{}", self.summary_string());
    }

    /// 返回模型摘要字符串（Unicode 文本表格，用于控制台输出）
    pub fn summary_string(&self) -> String {
        let desc = &self.descriptor;

        let rows: Vec<[String; 5]> = desc
            .nodes
            .iter()
            .map(|node| {
                [
                    node.name.clone(),
                    node.node_type.type_name().to_string(),
                    format!("{:?}", node.output_shape),
                    node.param_count
                        .map_or_else(|| "-".to_string(), format_number),
                    format_parent_names(desc, &node.parents),
                ]
            })
            .collect();

        let headers = ["节点名称", "类型", "输出形状", "参数量", "父节点"];
        let mut widths = headers.map(display_width);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(cell));
            }
        }

        let line = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{left}{}{right}\n", segments.join(mid))
        };
        let format_row = |cells: &[&str]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, &w)| format!(" {cell}{} ", " ".repeat(w - display_width(cell))))
                .collect();
            format!("│{}│\n", padded.join("│"))
        };

        let mut output = format!("模型摘要: {}\n", desc.name);
        output.push_str(&line("┌", "┬", "┐"));
        output.push_str(&format_row(&headers));
        output.push_str(&line("├", "┼", "┤"));
        for row in &rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            output.push_str(&format_row(&cells));
        }
        output.push_str(&line("└", "┴", "┘"));
        output.push_str(&format!(
            "总参数量: {}\n",
            format_number(desc.total_params())
        ));
        output
    }
}

/// 千分位格式化，如 3381 → "3,381"
fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }
    output
}

fn format_parent_names(desc: &GraphDescriptor, parents: &[u64]) -> String {
    if parents.is_empty() {
        return "-".to_string();
    }
    parents
        .iter()
        .filter_map(|&id| desc.nodes.get(id as usize))
        .map(|node| node.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 终端显示宽度：CJK 字符按 2 列计算
fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum()
}
