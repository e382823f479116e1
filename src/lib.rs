//! Guild Build - compare job-role skill profiles across seniority levels

pub mod core;
pub mod display;
pub mod model;
pub mod report;
pub mod table;
pub mod ui;
