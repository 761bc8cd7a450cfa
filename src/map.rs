use ndarray::prelude::*;
use ndarray_stats::QuantileExt;
use ndhistogram::{axis::Uniform, ndhistogram, Histogram};

use crate::core::{Disparity, Point, Undefined};

/// 视差图各类像素统计
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapSummary {
    pub valid: usize,
    pub boundary_row: usize,
    pub boundary_column: usize,
    pub zero_intensity: usize,
    pub inconsistent: usize,
    pub min_disparity: Option<i32>,
    pub max_disparity: Option<i32>,
    /// 出现次数最多的有效视差
    pub mode: Option<i32>,
    /// [min_disparity, max_disparity] 内每个视差的像素数量, 下标为 d - min_disparity
    pub histogram: Vec<u32>,
}

/// ## 视差图
/// 与左图同尺寸, 每个像素为一个有效视差或未定义原因
#[derive(Clone, Debug, PartialEq)]
pub struct DisparityMap {
    data: Array2<Disparity>,
    /// 计算时使用的视差范围
    range: (i32, i32),
}

impl DisparityMap {
    pub(crate) fn new(data: Array2<Disparity>, min_disparity: i32, max_disparity: i32) -> Self {
        Self {
            data,
            range: (min_disparity, max_disparity),
        }
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// 视差搜索范围 (min, max)
    pub fn range(&self) -> (i32, i32) {
        self.range
    }

    pub fn get(&self, point: Point) -> Option<Disparity> {
        self.data.get((*point.y(), *point.x())).copied()
    }

    pub fn view(&self) -> ArrayView2<Disparity> {
        self.data.view()
    }

    pub fn valid_count(&self) -> usize {
        self.data.iter().filter(|d| d.is_valid()).count()
    }

    pub fn summary(&self) -> MapSummary {
        let mut ret = MapSummary::default();
        let mut values = Vec::<i32>::new();
        self.data.iter().for_each(|d| match d {
            Disparity::Valid(v) => {
                ret.valid += 1;
                values.push(*v);
            }
            Disparity::Undefined(Undefined::BoundaryRow) => ret.boundary_row += 1,
            Disparity::Undefined(Undefined::BoundaryColumn) => ret.boundary_column += 1,
            Disparity::Undefined(Undefined::ZeroIntensity) => ret.zero_intensity += 1,
            Disparity::Undefined(Undefined::Inconsistent) => ret.inconsistent += 1,
        });
        if values.is_empty() {
            return ret;
        }
        let values = Array1::from(values);
        let (low, high) = match (values.min(), values.max()) {
            (Ok(low), Ok(high)) => (*low, *high),
            _ => return ret,
        };
        ret.min_disparity = Some(low);
        ret.max_disparity = Some(high);
        // 直方图只覆盖实际出现的视差 [low, high]
        let bins = (high as i64 - low as i64 + 1) as usize;
        let mut hist = ndhistogram!(
            Uniform::new(bins, low as f64, high as f64 + 1f64);u32
        );
        // 取格中心, 避免落在格边界上
        values.for_each(|v| hist.fill(&(*v as f64 + 0.5f64)));
        ret.histogram = (0..bins as i64)
            .map(|i| {
                hist.value(&(low as f64 + i as f64 + 0.5f64))
                    .copied()
                    .unwrap_or(0)
            })
            .collect();
        let counts = Array1::from(ret.histogram.clone());
        ret.mode = counts.argmax().ok().map(|i| (low as i64 + i as i64) as i32);
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> DisparityMap {
        let mut data = Array2::<Disparity>::default((2, 4));
        data[[0, 1]] = Disparity::Undefined(Undefined::BoundaryColumn);
        data[[0, 2]] = Disparity::Undefined(Undefined::ZeroIntensity);
        data[[0, 3]] = Disparity::Undefined(Undefined::Inconsistent);
        data[[1, 0]] = Disparity::Valid(3);
        data[[1, 1]] = Disparity::Valid(5);
        data[[1, 2]] = Disparity::Valid(3);
        data[[1, 3]] = Disparity::Valid(1);
        DisparityMap::new(data, 1, 5)
    }

    #[test]
    fn test_summary() {
        let summary = sample_map().summary();
        assert_eq!(summary.valid, 4);
        assert_eq!(summary.boundary_row, 1);
        assert_eq!(summary.boundary_column, 1);
        assert_eq!(summary.zero_intensity, 1);
        assert_eq!(summary.inconsistent, 1);
        assert_eq!(summary.min_disparity, Some(1));
        assert_eq!(summary.max_disparity, Some(5));
        assert_eq!(summary.histogram, vec![1, 0, 2, 0, 1]);
        assert_eq!(summary.mode, Some(3));
    }

    #[test]
    fn test_summary_without_valid() {
        let map = DisparityMap::new(Array2::<Disparity>::default((3, 3)), 0, 0);
        let summary = map.summary();
        assert_eq!(summary.valid, 0);
        assert_eq!(summary.boundary_row, 9);
        assert!(summary.histogram.is_empty());
        assert_eq!(summary.mode, None);
        assert_eq!(map.valid_count(), 0);
    }

    #[test]
    fn test_summary_wide_range() {
        let map = DisparityMap::new(
            Array2::<Disparity>::default((4, 4)),
            -2_000_000_000,
            2_000_000_000,
        );
        let summary = map.summary();
        assert_eq!(summary.boundary_row, 16);
        assert!(summary.histogram.is_empty());

        let mut data = Array2::<Disparity>::default((2, 2));
        data[[0, 0]] = Disparity::Valid(-1_999_999_999);
        data[[0, 1]] = Disparity::Valid(-1_999_999_997);
        data[[1, 0]] = Disparity::Valid(-1_999_999_997);
        let summary = DisparityMap::new(data, -2_000_000_000, 2_000_000_000).summary();
        assert_eq!(summary.valid, 3);
        assert_eq!(summary.min_disparity, Some(-1_999_999_999));
        assert_eq!(summary.max_disparity, Some(-1_999_999_997));
        assert_eq!(summary.histogram, vec![1, 0, 2]);
        assert_eq!(summary.mode, Some(-1_999_999_997));
    }

    #[test]
    fn test_get() {
        let map = sample_map();
        assert_eq!(map.get(Point::new(1, 1)), Some(Disparity::Valid(5)));
        assert_eq!(map.get(Point::new(4, 1)), None);
        assert_eq!(map.range(), (1, 5));
    }
}
