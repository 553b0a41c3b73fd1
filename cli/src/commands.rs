use std::io;

use polytrace::svg::Color;
use polytrace::topology::layer::LayerOptions;

pub struct ResolveCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub fill: Color,
    pub background: Option<Color>,
    pub width: f32,
    pub height: f32,
    pub options: LayerOptions,
}

pub struct SegmentCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
}

pub struct ClassifyCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub tolerance: f32,
}
