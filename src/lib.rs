//! 基于窗口匹配与左右一致性检查的视差图计算
//!
//! 输入为两幅已校正的单色图像(灰度矩阵), 对左图每个像素在 [min, max] 视差范围内搜索
//! 零均值SSD代价最小的偏移, 再从右图反向搜索验证, 结果为有效视差或未定义原因。
extern crate image;

pub mod core;
pub mod cost;
mod cpu;
pub mod error;
pub mod grid;
pub mod map;
pub mod utils;

pub use crate::cpu::DisparityCalculator;
pub use crate::grid::IntensityGrid;
pub use crate::map::{DisparityMap, MapSummary};
