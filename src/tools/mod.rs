mod stroke_builder;

pub use stroke_builder::StrokeBuilder;
