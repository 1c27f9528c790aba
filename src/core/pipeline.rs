use crate::core::generator::CardGenerator;
use crate::core::registry::NetworkRegistry;
use crate::core::render::render;
use crate::core::{CardRecord, ConfigProvider, GenerationOptions, OutputFormat, Pipeline, Sink};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct CardPipeline<S: Sink, C: ConfigProvider, R: Rng = StdRng> {
    sink: S,
    config: C,
    registry: NetworkRegistry,
    rng: R,
    reference_year: Option<i32>,
}

impl<S: Sink, C: ConfigProvider> CardPipeline<S, C, StdRng> {
    /// Seeds from `config.seed()` when set, otherwise from the thread RNG.
    pub fn new(sink: S, config: C, registry: NetworkRegistry) -> Self {
        let rng = match config.seed() {
            Some(seed) => {
                tracing::debug!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(sink, config, registry, rng)
    }
}

impl<S: Sink, C: ConfigProvider, R: Rng> CardPipeline<S, C, R> {
    pub fn with_rng(sink: S, config: C, registry: NetworkRegistry, rng: R) -> Self {
        Self {
            sink,
            config,
            registry,
            rng,
            reference_year: None,
        }
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }
}

impl<S: Sink, C: ConfigProvider, R: Rng> Pipeline for CardPipeline<S, C, R> {
    fn options(&self) -> GenerationOptions {
        self.config.generation_options()
    }

    fn format(&self) -> OutputFormat {
        self.config.output_format()
    }

    fn generate(&mut self) -> Result<Vec<CardRecord>> {
        let options = self.config.generation_options();

        let mut generator = CardGenerator::new(&self.registry);
        if let Some(year) = self.reference_year {
            generator = generator.with_reference_year(year);
        }

        Ok(generator.generate(&options, &mut self.rng))
    }

    fn render(&self, cards: &[CardRecord]) -> Result<String> {
        let include_details = self.config.generation_options().include_details;
        render(cards, self.config.output_format(), include_details)
    }

    fn emit(&self, rendered: &str) -> Result<()> {
        tracing::debug!("Writing {} bytes of output", rendered.len());
        self.sink.write_output(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::luhn;
    use crate::domain::model::NetworkSelector;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemorySink {
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl Sink for MemorySink {
        fn write_output(&self, data: &str) -> Result<()> {
            self.writes.borrow_mut().push(data.to_string());
            Ok(())
        }
    }

    struct MockConfig {
        options: GenerationOptions,
        format: OutputFormat,
        seed: Option<u64>,
    }

    impl MockConfig {
        fn new(network: &str, count: usize) -> Self {
            Self {
                options: GenerationOptions {
                    network: NetworkSelector::Named(network.to_string()),
                    count,
                    include_details: true,
                    luhn_valid: true,
                },
                format: OutputFormat::Txt,
                seed: Some(42),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn generation_options(&self) -> GenerationOptions {
            self.options.clone()
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn seed(&self) -> Option<u64> {
            self.seed
        }
    }

    #[test]
    fn test_generate_uses_config() {
        let mut pipeline = CardPipeline::new(
            MemorySink::default(),
            MockConfig::new("Mastercard", 8),
            NetworkRegistry::builtin(),
        );

        let cards = pipeline.generate().unwrap();
        assert_eq!(cards.len(), 8);
        for card in &cards {
            assert_eq!(card.network, "Mastercard");
            assert!(luhn::is_valid(&card.number));
        }
    }

    #[test]
    fn test_seeded_pipelines_agree() {
        let mut a = CardPipeline::new(
            MemorySink::default(),
            MockConfig::new("Visa", 5),
            NetworkRegistry::builtin(),
        )
        .with_reference_year(2026);
        let mut b = CardPipeline::new(
            MemorySink::default(),
            MockConfig::new("Visa", 5),
            NetworkRegistry::builtin(),
        )
        .with_reference_year(2026);

        assert_eq!(a.generate().unwrap(), b.generate().unwrap());
    }

    #[test]
    fn test_render_and_emit() {
        let sink = MemorySink::default();
        let mut config = MockConfig::new("Visa", 3);
        config.options.include_details = false;
        let mut pipeline = CardPipeline::new(sink.clone(), config, NetworkRegistry::builtin());

        let cards = pipeline.generate().unwrap();
        let rendered = pipeline.render(&cards).unwrap();
        pipeline.emit(&rendered).unwrap();

        let writes = sink.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].lines().count(), 3);
        assert!(writes[0].lines().all(|line| line.starts_with("Visa 4")));
    }
}
