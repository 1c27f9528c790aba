use fauxcard::config::toml_config::GenerationSection;
use fauxcard::core::luhn;
use fauxcard::core::Sink;
use fauxcard::utils::validation::Validate;
use fauxcard::{
    CardPipeline, CardRecord, GenerationEngine, OutputFormat, Result, Settings, TomlConfig,
};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tempfile::NamedTempFile;

#[derive(Clone, Default)]
struct CaptureSink {
    output: Rc<RefCell<String>>,
}

impl Sink for CaptureSink {
    fn write_output(&self, data: &str) -> Result<()> {
        self.output.borrow_mut().push_str(data);
        Ok(())
    }
}

fn write_preset(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_end_to_end_json_from_preset() {
    let preset_file = write_preset(
        r#"
[generation]
network = "American Express"
count = 4
format = "json"
seed = 1234
"#,
    );

    let preset = TomlConfig::from_file(preset_file.path()).unwrap();
    preset.validate().unwrap();
    let registry = preset.build_registry().unwrap();
    let settings = Settings::resolve(&GenerationSection::default(), Some(&preset));

    let sink = CaptureSink::default();
    let pipeline = CardPipeline::new(sink.clone(), settings, registry);
    let mut engine = GenerationEngine::new(pipeline);

    let summary = engine.run().unwrap();
    assert_eq!(summary.requested, 4);
    assert_eq!(summary.generated, 4);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.format, OutputFormat::Json);

    let cards: Vec<CardRecord> = serde_json::from_str(&sink.output.borrow()).unwrap();
    assert_eq!(cards.len(), 4);
    for card in cards {
        assert_eq!(card.network, "American Express");
        assert_eq!(card.number.len(), 15);
        assert_eq!(card.cvv.len(), 4);
        assert!(luhn::is_valid(&card.number));
    }
}

#[test]
fn test_end_to_end_csv_with_custom_network_override() {
    let preset_file = write_preset(
        r#"
[generation]
network = "Visa"
count = 50

[[networks]]
name = "JCB"
prefixes = ["3528"]
length = 16
cvv_length = 3
"#,
    );

    let preset = TomlConfig::from_file(preset_file.path()).unwrap();
    let registry = preset.build_registry().unwrap();
    let overrides = GenerationSection {
        network: Some("JCB".to_string()),
        count: Some(6),
        include_details: Some(false),
        format: Some(OutputFormat::Csv),
        seed: Some(9),
        ..Default::default()
    };
    let settings = Settings::resolve(&overrides, Some(&preset));

    let sink = CaptureSink::default();
    let mut engine = GenerationEngine::new(CardPipeline::new(sink.clone(), settings, registry));
    engine.run().unwrap();

    let output = sink.output.borrow();
    let mut reader = csv::Reader::from_reader(output.as_bytes());
    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(header, vec!["type", "number"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 6);
    for row in rows {
        assert_eq!(&row[0], "JCB");
        assert!(row[1].starts_with("3528"));
        assert!(luhn::is_valid(&row[1]));
    }
}

#[test]
fn test_unknown_network_run_succeeds_with_empty_output() {
    let overrides = GenerationSection {
        network: Some("Diners Club".to_string()),
        count: Some(3),
        format: Some(OutputFormat::Txt),
        ..Default::default()
    };
    let settings = Settings::resolve(&overrides, None);

    let sink = CaptureSink::default();
    let mut engine = GenerationEngine::new(CardPipeline::new(
        sink.clone(),
        settings,
        fauxcard::NetworkRegistry::builtin(),
    ));

    let summary = engine.run().unwrap();
    assert_eq!(summary.generated, 0);
    assert_eq!(summary.skipped, 3);
    assert!(sink.output.borrow().is_empty());
}

#[test]
fn test_seed_makes_runs_reproducible() {
    let run = || {
        let overrides = GenerationSection {
            network: Some("Visa".to_string()),
            count: Some(5),
            include_details: Some(false),
            format: Some(OutputFormat::Plain),
            seed: Some(4242),
            ..Default::default()
        };
        let sink = CaptureSink::default();
        let mut engine = GenerationEngine::new(CardPipeline::new(
            sink.clone(),
            Settings::resolve(&overrides, None),
            fauxcard::NetworkRegistry::builtin(),
        ));
        engine.run().unwrap();
        let output = sink.output.borrow().clone();
        output
    };

    let first = run();
    assert_eq!(first, run());
    assert_eq!(first.lines().count(), 5);
    assert!(first.lines().all(|line| line.starts_with("Visa 4")));
}

#[test]
fn test_non_ascii_digit_prefix_is_rejected() {
    let preset_file = write_preset(
        r#"
[[networks]]
name = "Wide"
prefixes = ["４５"]
length = 16
cvv_length = 3
"#,
    );

    let preset = TomlConfig::from_file(preset_file.path()).unwrap();
    assert!(preset.validate().is_err());
    assert!(preset.build_registry().is_err());
}

#[test]
fn test_invalid_preset_profile_is_rejected() {
    let preset_file = write_preset(
        r#"
[[networks]]
name = "Tiny"
prefixes = ["4"]
length = 8
cvv_length = 3
"#,
    );

    let preset = TomlConfig::from_file(preset_file.path()).unwrap();
    assert!(preset.validate().is_err());
    assert!(preset.build_registry().is_err());
}
