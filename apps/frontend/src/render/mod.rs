// Result rendering. Everything here is pure: payload in, markup out.

pub mod calculator;
pub mod html;
pub mod resume;

pub use calculator::{render_result_line, ResultLine};
pub use resume::render_resume;
