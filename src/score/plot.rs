/*
 * @Author       : 老董
 * @Date         : 2026-02-03
 * @Description  : 分数折线图绘制（固定纵轴范围，超出部分截断）
 */

use super::ScoreError;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use std::path::Path;
use tracing::debug;

/// 绘图外观配置
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// 绘图区四周留白（像素）
    pub margin: u32,
    /// 纵轴范围，超出的值被截断到边界
    pub y_range: (f64, f64),
    /// 水平网格线把纵轴分为几段
    pub y_divisions: usize,
    /// 竖直网格线把横轴分为几段
    pub x_divisions: usize,
    pub background: Rgb<u8>,
    pub grid_color: Rgb<u8>,
    pub axis_color: Rgb<u8>,
    pub line_color: Rgb<u8>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            margin: 40,
            y_range: (-1.2, 1.2),
            y_divisions: 12,
            x_divisions: 10,
            background: Rgb([255, 255, 255]),
            grid_color: Rgb([225, 225, 225]),
            axis_color: Rgb([90, 90, 90]),
            line_color: Rgb([31, 119, 180]),
        }
    }
}

impl PlotConfig {
    /// 绘制分数折线图
    pub fn render(&self, scores: &[f64]) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.width, self.height, self.background);
        let (left, top, right, bottom) = self.plot_area();

        // 网格
        for k in 0..=self.y_divisions {
            let y = top + (bottom - top) * k as f32 / self.y_divisions.max(1) as f32;
            draw_line_segment_mut(&mut image, (left, y), (right, y), self.grid_color);
        }
        for k in 0..=self.x_divisions {
            let x = left + (right - left) * k as f32 / self.x_divisions.max(1) as f32;
            draw_line_segment_mut(&mut image, (x, top), (x, bottom), self.grid_color);
        }

        // 坐标框
        let corners = [(left, top), (right, top), (right, bottom), (left, bottom)];
        for i in 0..corners.len() {
            let next = corners[(i + 1) % corners.len()];
            draw_line_segment_mut(&mut image, corners[i], next, self.axis_color);
        }

        let points: Vec<(f32, f32)> = scores
            .iter()
            .enumerate()
            .map(|(i, &v)| self.project(i, scores.len(), v))
            .collect();
        match points.as_slice() {
            [] => {}
            [(x, y)] => {
                draw_filled_circle_mut(&mut image, (*x as i32, *y as i32), 2, self.line_color);
            }
            _ => {
                for pair in points.windows(2) {
                    draw_line_segment_mut(&mut image, pair[0], pair[1], self.line_color);
                }
            }
        }
        image
    }

    /// 绘制并保存为图片文件（格式由扩展名决定，一般为 PNG）
    pub fn save<P: AsRef<Path>>(&self, scores: &[f64], path: P) -> Result<(), ScoreError> {
        let path = path.as_ref();
        self.render(scores).save(path)?;
        debug!("已绘制 {} 个点至 {}", scores.len(), path.display());
        Ok(())
    }

    /// 绘图区边界：(左, 上, 右, 下)
    pub(super) fn plot_area(&self) -> (f32, f32, f32, f32) {
        let margin = self.margin as f32;
        (
            margin,
            margin,
            self.width as f32 - margin,
            self.height as f32 - margin,
        )
    }

    /// 第 `index` 个（共 `len` 个）分数在图中的像素坐标
    pub(super) fn project(&self, index: usize, len: usize, value: f64) -> (f32, f32) {
        let (left, top, right, bottom) = self.plot_area();
        let (y_min, y_max) = self.y_range;

        let x = if len > 1 {
            left + (right - left) * index as f32 / (len - 1) as f32
        } else {
            (left + right) / 2.0
        };
        let ratio = ((value.clamp(y_min, y_max) - y_min) / (y_max - y_min)) as f32;
        (x, bottom - (bottom - top) * ratio)
    }
}
