pub mod chart;
pub mod lines;

pub use chart::render_cost_chart;
pub use lines::{accuracy_lines, cost_line};
