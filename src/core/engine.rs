use crate::core::{OutputFormat, Pipeline};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub requested: usize,
    pub generated: usize,
    pub skipped: usize,
    pub format: OutputFormat,
}

pub struct GenerationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GenerationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&mut self) -> Result<GenerationSummary> {
        let options = self.pipeline.options();
        let format = self.pipeline.format();

        tracing::info!(
            "Generating {} {} card(s) (details: {}, luhn: {})",
            options.count,
            options.network,
            options.include_details,
            options.luhn_valid
        );
        let cards = self.pipeline.generate()?;

        let skipped = options.count.saturating_sub(cards.len());
        if skipped > 0 {
            tracing::warn!(
                "Skipped {} of {} requested records (no matching network profile for \"{}\")",
                skipped,
                options.count,
                options.network
            );
        }

        tracing::debug!("Rendering {} records as {}", cards.len(), format);
        let rendered = self.pipeline.render(&cards)?;

        self.pipeline.emit(&rendered)?;

        let summary = GenerationSummary {
            requested: options.count,
            generated: cards.len(),
            skipped,
            format,
        };
        tracing::info!(
            "Generated {}/{} records as {}",
            summary.generated,
            summary.requested,
            summary.format
        );
        Ok(summary)
    }
}
