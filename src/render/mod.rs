pub mod apportion;
pub mod bar;
pub mod column;
pub mod paint;

pub use apportion::{Correction, correct_min_width, eliminate_small, proportional};
pub use bar::{BarLayout, SparkBar};
pub use column::SparkColumn;
pub use paint::Painter;
