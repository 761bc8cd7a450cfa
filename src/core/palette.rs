use getset::{CopyGetters, Getters, MutGetters, Setters};
use image::Rgb;

/// 未定义视差的标记颜色
/// 有效视差编码为灰度, 因此纯色标记不会与之混淆
#[derive(Getters, Setters, MutGetters, CopyGetters, Copy, Clone, Debug, PartialEq)]
pub struct MarkerPalette {
    /// 窗口或搜索范围超出图像边界(行/列)
    #[getset(get = "pub", set = "pub")]
    boundary: Rgb<u8>,
    /// 窗口内存在零灰度像素
    #[getset(get = "pub", set = "pub")]
    zero_intensity: Rgb<u8>,
    /// 左右一致性检查失败
    #[getset(get = "pub", set = "pub")]
    inconsistent: Rgb<u8>,
}

impl Default for MarkerPalette {
    fn default() -> Self {
        Self {
            boundary: Rgb([0, 0, 255]),
            zero_intensity: Rgb([255, 0, 0]),
            inconsistent: Rgb([0, 255, 0]),
        }
    }
}

impl MarkerPalette {
    pub fn build(&self) -> Self {
        *self
    }
}
