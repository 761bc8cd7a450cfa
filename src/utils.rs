use image::{Rgb, RgbImage};
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};
use ndarray::{parallel::prelude::*, prelude::*, Zip};

use crate::core::{Disparity, MarkerPalette, Undefined};
use crate::error::Result;
use crate::map::DisparityMap;

pub fn init_log(level: &str) -> Result<()> {
    let stdout: ConsoleAppender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{h({l})}] - {m}{n}",
        )))
        .build();
    let log_config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(
            Root::builder()
                .appender("stdout")
                .build(if level == "trace" {
                    LevelFilter::Trace
                } else if level == "debug" {
                    LevelFilter::Debug
                } else {
                    LevelFilter::Info
                }),
        )?;
    log4rs::init_config(log_config)?;
    Ok(())
}

/// 有效视差线性映射到 0-255 灰度
/// 视差范围只有一个值时为常数 255
pub fn disparity_to_gray(d: i32, min_disparity: i32, max_disparity: i32) -> u8 {
    if max_disparity == min_disparity {
        return 255;
    }
    let scale = 255i64 * (d as i64 - min_disparity as i64)
        / (max_disparity as i64 - min_disparity as i64);
    scale.max(0).min(255) as u8
}

/// 视差对应的显示颜色
pub fn disparity_color(d: &Disparity, range: (i32, i32), palette: &MarkerPalette) -> Rgb<u8> {
    match d {
        Disparity::Valid(v) => {
            let g = disparity_to_gray(*v, range.0, range.1);
            Rgb([g, g, g])
        }
        Disparity::Undefined(Undefined::BoundaryRow)
        | Disparity::Undefined(Undefined::BoundaryColumn) => *palette.boundary(),
        Disparity::Undefined(Undefined::ZeroIntensity) => *palette.zero_intensity(),
        Disparity::Undefined(Undefined::Inconsistent) => *palette.inconsistent(),
    }
}

/// 转换为视差图
pub fn to_disparity_image(source: &DisparityMap, palette: &MarkerPalette) -> RgbImage {
    let (height, width) = source.dim();
    let range = source.range();
    let colors = Zip::from(source.view()).par_map_collect(|d| disparity_color(d, range, palette));
    RgbImage::from_fn(width as u32, height as u32, |x, y| {
        colors[[y as usize, x as usize]]
    })
}
