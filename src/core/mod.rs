pub mod engine;
pub mod generator;
pub mod luhn;
pub mod pipeline;
pub mod registry;
pub mod render;

pub use crate::domain::model::{CardRecord, GenerationOptions, NetworkProfile, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink};
pub use crate::utils::error::Result;
