extern crate image;

use image::RgbImage;

use crate::core::{Disparity, DisparityOption, Point, Undefined, Window};
use crate::cost::window_cost;
use crate::error::{self, Error, Result};
use crate::grid::IntensityGrid;
use crate::map::DisparityMap;
use crate::utils::to_disparity_image;

use getset::{CopyGetters, Getters, MutGetters, Setters};
use ndarray::{parallel::prelude::*, prelude::*, Zip};

use log::{debug, trace};

/// 在 [start, end] 内逐个偏移计算窗口代价, 返回代价最小的偏移
/// 相同代价取第一个; 任一代价无效时返回 None
fn search_best_shift(
    a: &ArrayView2<u8>,
    b: &ArrayView2<u8>,
    row: isize,
    col: isize,
    start: i32,
    end: i32,
    window: Window,
) -> Option<i32> {
    let mut best: Option<(i32, f64)> = None;
    for d in start..=end {
        let cost = window_cost(a, b, row, col, d, window)?;
        match best {
            Some((_, min_cost)) if cost >= min_cost => {}
            _ => best = Some((d, cost)),
        }
    }
    best.map(|(d, _)| d)
}

#[derive(Getters, Setters, MutGetters, CopyGetters, Clone, Debug)]
pub struct DisparityCalculator {
    /// 算法参数
    #[getset(get = "pub")]
    option: DisparityOption,
}

impl Default for DisparityCalculator {
    fn default() -> Self {
        Self {
            option: DisparityOption::default(),
        }
    }
}

impl DisparityCalculator {
    pub fn new(option: Option<DisparityOption>) -> Result<Self> {
        let mut ret = Self::default();
        if let Some(v) = option {
            ret.option = v;
        }
        // 视差范围 min <= max
        if ret.option.min_disparity() > ret.option.max_disparity() {
            return Err(Error::new(1002, error::ERROR_1002));
        }
        if *ret.option.half_window() < 1 {
            return Err(Error::new(1003, error::ERROR_1003));
        }
        Ok(ret)
    }

    pub fn window(&self) -> Window {
        Window::new(*self.option.half_window() as usize)
    }

    /// ## 计算单个像素的视差
    /// 1. 行边界检查: 窗口在两幅图像的行方向都不能越界
    /// 2. 列边界检查: 正向搜索中 a 的 col 窗口与 b 的 col+d 窗口, 反向搜索中 b 的 col 窗口与 a 的 col-d 窗口,
    ///    对 [min, max] 内所有 d 都不能越界
    /// 3. 正向搜索 a -> b, 得到 d1
    /// 4. 反向搜索 b -> a, 偏移范围 [-max, -min], 窗口中心仍为 col, 得到 d2
    /// 5. 一致性检查 |d1 + d2| <= tolerance
    ///
    /// 边界检查在搜索前完成, 搜索过程中不会读取图像外的像素
    pub fn resolve(&self, left: &IntensityGrid, right: &IntensityGrid, point: Point) -> Disparity {
        let window = self.window();
        let min_disparity = *self.option.min_disparity();
        let max_disparity = *self.option.max_disparity();
        let row = *point.y() as isize;
        let col = *point.x() as isize;

        if !window.fits(row, left.height()) || !window.fits(row, right.height()) {
            return Undefined::BoundaryRow.into();
        }
        // 正向: a 中 col, b 中 col + d
        if !window.fits(col, left.width())
            || !window.fits_span(
                col + min_disparity as isize,
                col + max_disparity as isize,
                right.width(),
            )
        {
            return Undefined::BoundaryColumn.into();
        }
        // 反向: b 中 col, a 中 col - d
        if !window.fits(col, right.width())
            || !window.fits_span(
                col - max_disparity as isize,
                col - min_disparity as isize,
                left.width(),
            )
        {
            return Undefined::BoundaryColumn.into();
        }

        let (left_view, right_view) = (left.view(), right.view());
        let d1 = match search_best_shift(
            &left_view,
            &right_view,
            row,
            col,
            min_disparity,
            max_disparity,
            window,
        ) {
            Some(d) => d,
            None => return Undefined::ZeroIntensity.into(),
        };
        let d2 = match search_best_shift(
            &right_view,
            &left_view,
            row,
            col,
            -max_disparity,
            -min_disparity,
            window,
        ) {
            Some(d) => d,
            None => return Undefined::ZeroIntensity.into(),
        };
        if (d1 + d2).abs() as u32 > *self.option.tolerance() {
            return Undefined::Inconsistent.into();
        }
        Disparity::Valid(d1)
    }

    /// ## 计算视差图
    /// 对左图每个像素独立计算视差, 像素间无依赖, 按像素并行
    pub fn calculate(&self, left: &IntensityGrid, right: &IntensityGrid) -> Result<DisparityMap> {
        let (height, width) = left.dim();
        if width == 0 || height == 0 || right.width() == 0 || right.height() == 0 {
            return Err(Error::new(1001, error::ERROR_1001));
        }
        let sw = stopwatch::Stopwatch::start_new();
        trace!(
            "    [calculate] begin, left(H x W): {:?}, right: {:?}, disparity: [{}, {}], window: {}",
            left.dim(),
            right.dim(),
            self.option.min_disparity(),
            self.option.max_disparity(),
            self.window().side()
        );
        let mut data = Array2::<Disparity>::default((height, width));
        Zip::indexed(&mut data).par_for_each(|(y, x), val| {
            *val = self.resolve(left, right, Point::new(x, y));
        });
        let map = DisparityMap::new(
            data,
            *self.option.min_disparity(),
            *self.option.max_disparity(),
        );
        debug!(
            "[calculate] disparity map end. elapse time: {}ms, {:?}",
            sw.elapsed_ms(),
            map.summary()
        );
        Ok(map)
    }

    /// 由两幅单色RGB图像计算视差图并编码为彩色图像
    pub fn calculate_images(&self, left_image: &RgbImage, right_image: &RgbImage) -> Result<RgbImage> {
        let mut sw = stopwatch::Stopwatch::start_new();
        let left = IntensityGrid::from_rgb(left_image)?;
        let right = IntensityGrid::from_rgb(right_image)?;
        debug!(
            "[calculate_images] image to intensity grid. left(H x W): {:?}, right: {:?}, elapse time: {}ms",
            left.dim(),
            right.dim(),
            sw.elapsed_ms()
        );
        let map = self.calculate(&left, &right)?;
        sw.restart();
        let ret = to_disparity_image(&map, self.option.palette());
        debug!(
            "[calculate_images] encode disparity image. elapse time: {}ms",
            sw.elapsed_ms()
        );
        Ok(ret)
    }
}
