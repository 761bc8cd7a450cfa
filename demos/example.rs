extern crate image;
use disparity_map::core::*;
use disparity_map::utils;

use log::{debug, info};

/// 用法: example <left.png> <right.png> [min] [max] [tolerance]
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    utils::init_log("debug")?;
    let args: Vec<String> = std::env::args().collect();
    let left_path = args.get(1).map(String::as_str).unwrap_or("images/left.png");
    let right_path = args.get(2).map(String::as_str).unwrap_or("images/right.png");
    let min_disparity: i32 = args.get(3).map(|v| v.parse()).transpose()?.unwrap_or(0);
    let max_disparity: i32 = args.get(4).map(|v| v.parse()).transpose()?.unwrap_or(16);
    let tolerance: u32 = args.get(5).map(|v| v.parse()).transpose()?.unwrap_or(1);

    // 1. 源图转换为8位灰度
    let limg = image::open(left_path)?.to_luma8();
    let rimg = image::open(right_path)?.to_luma8();
    let left = disparity_map::IntensityGrid::from_gray(&limg)?;
    let right = disparity_map::IntensityGrid::from_gray(&rimg)?;

    let option = DisparityOption::new(min_disparity, max_disparity)
        .set_tolerance(tolerance)
        .build();
    let calculator = disparity_map::DisparityCalculator::new(Some(option))?;
    let mut sw = stopwatch::Stopwatch::start_new();
    let map = calculator.calculate(&left, &right)?;
    info!("calculate elapse time: {}ms", sw.elapsed_ms());
    info!("{:?}", map.summary());
    sw.restart();
    utils::to_disparity_image(&map, option.palette()).save("disparity.png")?;
    debug!(
        "[calculate] save disparity image. elapse time: {}ms",
        sw.elapsed_ms()
    );
    Ok(())
}
