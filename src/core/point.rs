use getset::{CopyGetters, Getters, MutGetters, Setters};

/// 像素坐标, x为列, y为行
#[derive(Getters, Setters, MutGetters, CopyGetters, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Point {
    #[getset(get = "pub", set = "pub")]
    x: usize,
    #[getset(get = "pub", set = "pub")]
    y: usize,
}
impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
impl Default for Point {
    fn default() -> Self {
        Self {
            x: 0usize,
            y: 0usize,
        }
    }
}
