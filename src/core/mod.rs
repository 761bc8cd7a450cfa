mod disparity;
mod option;
mod palette;
mod point;
mod window;

pub use disparity::{Disparity, Undefined};
pub use option::DisparityOption;
pub use palette::MarkerPalette;
pub use point::Point;
pub use window::Window;
