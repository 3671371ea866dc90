//! Fixed-layout text report
//!
//! The report mixes two kinds of content: blocks computed from the current
//! run (statistics, measurement table) and static hardware documentation
//! carried in a [`ReportTemplate`].

mod renderer;
mod template;

pub use renderer::{ReportInput, render, render_measurements};
pub use template::ReportTemplate;
