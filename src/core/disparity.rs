/// 视差未定义的原因
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Undefined {
    /// 行方向窗口超出任一图像
    BoundaryRow,
    /// 列方向窗口(含整个搜索范围)超出任一图像
    BoundaryColumn,
    /// 采样窗口内存在零灰度("无数据")像素
    ZeroIntensity,
    /// 正向视差与反向视差之和超过阈值
    Inconsistent,
}

/// 单个像素的视差计算结果
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Disparity {
    /// 通过一致性检查的视差值, 位于 [min_disparity, max_disparity] 内
    Valid(i32),
    Undefined(Undefined),
}

impl Disparity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Disparity::Valid(_))
    }
    pub fn value(&self) -> Option<i32> {
        match self {
            Disparity::Valid(d) => Some(*d),
            Disparity::Undefined(_) => None,
        }
    }
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            Disparity::Undefined(Undefined::BoundaryRow)
                | Disparity::Undefined(Undefined::BoundaryColumn)
        )
    }
}

impl Default for Disparity {
    fn default() -> Self {
        Disparity::Undefined(Undefined::BoundaryRow)
    }
}

impl From<Undefined> for Disparity {
    fn from(reason: Undefined) -> Self {
        Disparity::Undefined(reason)
    }
}
