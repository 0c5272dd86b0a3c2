pub mod area_chart;
pub mod bar_chart;
pub mod geometry;
