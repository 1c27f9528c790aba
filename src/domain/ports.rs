use crate::domain::model::{CardRecord, GenerationOptions, OutputFormat};
use crate::utils::error::Result;

/// Destination for rendered output.
pub trait Sink {
    fn write_output(&self, data: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn generation_options(&self) -> GenerationOptions;
    fn output_format(&self) -> OutputFormat;
    fn seed(&self) -> Option<u64>;
}

pub trait Pipeline {
    fn options(&self) -> GenerationOptions;
    fn format(&self) -> OutputFormat;
    fn generate(&mut self) -> Result<Vec<CardRecord>>;
    fn render(&self, cards: &[CardRecord]) -> Result<String>;
    fn emit(&self, rendered: &str) -> Result<()>;
}
