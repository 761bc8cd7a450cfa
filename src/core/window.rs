use getset::CopyGetters;

/// 方形匹配窗口, 大小 (2M+1) x (2M+1)
#[derive(CopyGetters, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// 窗口半径M
    #[getset(get_copy = "pub")]
    half: usize,
}

impl Window {
    pub fn new(half: usize) -> Self {
        Self { half }
    }
    /// 窗口边长 2M+1
    pub fn side(&self) -> usize {
        2 * self.half + 1
    }
    /// 窗口内采样点数量N
    pub fn sample_count(&self) -> usize {
        self.side() * self.side()
    }
    /// 以 center 为中心的窗口是否完全落在长度为 len 的轴上
    pub fn fits(&self, center: isize, len: usize) -> bool {
        let half = self.half as isize;
        center - half >= 0 && center + half < len as isize
    }
    /// 中心在 [first, last] 范围内的所有窗口是否都落在轴上
    pub fn fits_span(&self, first: isize, last: isize, len: usize) -> bool {
        self.fits(first, len) && self.fits(last, len)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self { half: 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::Window;

    #[test]
    fn test_window_size() {
        let window = Window::default();
        assert_eq!(window.side(), 7);
        assert_eq!(window.sample_count(), 49);
    }

    #[test]
    fn test_window_fits() {
        let window = Window::new(3);
        assert!(!window.fits(2, 20));
        assert!(window.fits(3, 20));
        assert!(window.fits(16, 20));
        assert!(!window.fits(17, 20));
        assert!(!window.fits(-1, 20));
        assert!(!window.fits(3, 6));
        assert!(window.fits_span(5, 10, 20));
        assert!(!window.fits_span(5, 17, 20));
    }
}
