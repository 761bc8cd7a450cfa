use ndarray::prelude::*;

use crate::core::Window;

/// ## 窗口匹配代价
/// 以 a 中 (row, col) 与 b 中 (row, col + shift) 为中心, 在 (2M+1) x (2M+1) 窗口内计算
/// 逐像素灰度差的方差(零均值SSD):
///
/// ```text
/// mean = 1/N * Σ (a[i][j] - b[i][j+shift])
/// cost = 1/N * Σ (a[i][j] - b[i][j+shift])² - mean²
/// ```
///
/// 对两图整体的亮度偏移不敏感, 代价越小匹配越好。
/// 任一采样点为 0 或越界时返回 None, 此时代价无意义。
///
///### 参数
/// * a, b: 灰度矩阵视图
/// * row, col: 窗口在 a 中的中心
/// * shift: 水平偏移, b 中窗口中心为 col + shift
/// * window: 匹配窗口
pub fn window_cost(
    a: &ArrayView2<u8>,
    b: &ArrayView2<u8>,
    row: isize,
    col: isize,
    shift: i32,
    window: Window,
) -> Option<f64> {
    let half = window.half() as isize;
    let (ha, wa) = a.dim();
    let (hb, wb) = b.dim();
    let shift = shift as isize;
    let mut ssd = 0f64;
    let mut mean = 0f64;
    for i in (row - half)..=(row + half) {
        if i < 0 || i as usize >= ha || i as usize >= hb {
            return None;
        }
        let i = i as usize;
        for j in (col - half)..=(col + half) {
            let k = j + shift;
            if j < 0 || k < 0 || j as usize >= wa || k as usize >= wb {
                return None;
            }
            let va = a[[i, j as usize]];
            let vb = b[[i, k as usize]];
            if va == 0 || vb == 0 {
                return None;
            }
            let dv = va as f64 - vb as f64;
            mean += dv;
            ssd += dv * dv;
        }
    }
    let n = window.sample_count() as f64;
    mean /= n;
    Some(ssd / n - mean * mean)
}
