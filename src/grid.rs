use image::{GrayImage, RgbImage};
use ndarray::prelude::*;
use nshare::{ToNdarray2, ToNdarray3};

use log::trace;

use crate::error::{self, Error, Result};

/// ## 灰度矩阵
/// 由单色图像构建的 H x W 灰度值矩阵(0-255), 行优先, 构建后不可修改
/// 灰度值 0 表示"无数据", 窗口内出现 0 时该像素视差未定义
#[derive(Clone, Debug, PartialEq)]
pub struct IntensityGrid {
    data: Array2<u8>,
}

impl IntensityGrid {
    /// 由二维数组构建, shape 为 (height, width)
    pub fn from_array(data: Array2<u8>) -> Result<Self> {
        let (height, width) = data.dim();
        if width == 0 || height == 0 {
            return Err(Error::new(1001, error::ERROR_1001));
        }
        Ok(Self { data })
    }

    /// 由行优先的原始灰度数据构建
    pub fn from_raw(width: u32, height: u32, raw: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::new(1001, error::ERROR_1001));
        }
        let data = Array2::from_shape_vec((height as usize, width as usize), raw)
            .map_err(|_| Error::new(1005, error::ERROR_1005))?;
        Ok(Self { data })
    }

    /// 由8位灰度图构建
    pub fn from_gray(source: &GrayImage) -> Result<Self> {
        if source.width() == 0 || source.height() == 0 {
            return Err(Error::new(1001, error::ERROR_1001));
        }
        Self::from_array(source.clone().into_ndarray2())
    }

    /// ## 由RGB图像构建
    /// 每个像素的 R, G, B 必须相等, 否则返回 1004 错误并给出第一个不满足的像素坐标
    pub fn from_rgb(source: &RgbImage) -> Result<Self> {
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::new(1001, error::ERROR_1001));
        }
        // (C, H, W)
        let source_nd = source.clone().into_ndarray3();
        let red = source_nd.index_axis(Axis(0), 0);
        let green = source_nd.index_axis(Axis(0), 1);
        let blue = source_nd.index_axis(Axis(0), 2);
        for ((y, x), r) in red.indexed_iter() {
            if *r != green[[y, x]] || *r != blue[[y, x]] {
                trace!(
                    "    [intensity_grid] pixel({}, {}) is not gray: {} {} {}",
                    x,
                    y,
                    r,
                    green[[y, x]],
                    blue[[y, x]]
                );
                return Err(Error::new(
                    1004,
                    &format!("{}: pixel ({}, {})", error::ERROR_1004, x, y),
                ));
            }
        }
        Self::from_array(red.to_owned())
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn view(&self) -> ArrayView2<u8> {
        self.data.view()
    }

    /// 取 (row, col) 处灰度值, 越界返回 None
    pub fn get(&self, row: isize, col: isize) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        self.data.get((row as usize, col as usize)).copied()
    }
}


#[cfg(test)]
mod tests {
    use super::IntensityGrid;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_from_gray() {
        let img = GrayImage::from_fn(4, 3, |x, y| Luma([(x + 10 * y) as u8]));
        let grid = IntensityGrid::from_gray(&img).unwrap();
        assert_eq!(grid.dim(), (3, 4));
        assert_eq!(grid.get(2, 3), Some(23));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, -1), None);
    }

    #[test]
    fn test_from_rgb_monochrome() {
        let img = RgbImage::from_fn(5, 2, |x, y| {
            let v = (x * 7 + y) as u8;
            Rgb([v, v, v])
        });
        let grid = IntensityGrid::from_rgb(&img).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 4), Some(29));
    }

    #[test]
    fn test_from_rgb_not_monochrome() {
        let mut img = RgbImage::from_pixel(5, 5, Rgb([9, 9, 9]));
        img.put_pixel(3, 1, Rgb([9, 10, 9]));
        let err = IntensityGrid::from_rgb(&img).unwrap_err();
        assert_eq!(err.code, 1004);
        assert!(err.message.contains("(3, 1)"));
    }

    #[test]
    fn test_empty_image() {
        assert_eq!(
            IntensityGrid::from_gray(&GrayImage::new(0, 4)).unwrap_err().code,
            1001
        );
        assert_eq!(
            IntensityGrid::from_raw(3, 0, vec![]).unwrap_err().code,
            1001
        );
    }

    #[test]
    fn test_from_raw_length_mismatch() {
        assert_eq!(
            IntensityGrid::from_raw(3, 2, vec![1; 5]).unwrap_err().code,
            1005
        );
        let grid = IntensityGrid::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.get(1, 0), Some(4));
    }
}
