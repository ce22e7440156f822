pub mod chart_service;
pub mod normalize_service;
pub mod renderer_service;
pub mod svg_painter;
pub mod window_service;
