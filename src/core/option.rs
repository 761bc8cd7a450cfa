use getset::{CopyGetters, Getters, MutGetters, Setters};

use crate::core::MarkerPalette;

/// 视差计算参数设置
#[derive(Getters, Setters, MutGetters, CopyGetters, Copy, Clone, Debug, PartialEq)]
pub struct DisparityOption {
    /// 最小视差(dStart)
    #[getset(get = "pub", set = "pub")]
    min_disparity: i32,
    /// 最大视差(dEnd), 包含在搜索范围内
    #[getset(get = "pub", set = "pub")]
    max_disparity: i32,
    /// 左右一致性约束阈值, |d1 + d2| 超过该值视为不一致
    #[getset(get = "pub", set = "pub")]
    tolerance: u32,
    /// 匹配窗口半径M, 窗口大小为 (2M+1) x (2M+1)
    #[getset(get = "pub", set = "pub")]
    half_window: u32,
    /// 未定义视差的标记颜色
    #[getset(get = "pub", set = "pub")]
    palette: MarkerPalette,
}

impl Default for DisparityOption {
    fn default() -> Self {
        Self {
            min_disparity: 0,
            max_disparity: 16,
            tolerance: 1,
            half_window: 3,
            palette: MarkerPalette::default(),
        }
    }
}

impl DisparityOption {
    pub fn new(min_disparity: i32, max_disparity: i32) -> Self {
        let mut r = DisparityOption::default();
        r.min_disparity = min_disparity;
        r.max_disparity = max_disparity;
        r
    }
    ///
    pub fn build(&self) -> Self {
        *self
    }
}
