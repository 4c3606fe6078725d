pub mod compute;
pub mod render;

pub use compute::compute;
pub use render::{render_calendar, render_sample, render_summary, render_weekdays};
