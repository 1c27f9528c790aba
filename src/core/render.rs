use crate::domain::model::{CardRecord, OutputFormat};
use crate::utils::error::{CardGenError, Result};
use serde::Serialize;

const DETAIL_KEYS: &[&str] = &["type", "number", "cvv", "expiry", "name"];
const NUMBER_KEYS: &[&str] = &["type", "number"];

pub fn output_keys(include_details: bool) -> &'static [&'static str] {
    if include_details {
        DETAIL_KEYS
    } else {
        NUMBER_KEYS
    }
}

fn field<'c>(card: &'c CardRecord, key: &str) -> &'c str {
    match key {
        "type" => &card.network,
        "number" => &card.number,
        "cvv" => &card.cvv,
        "expiry" => &card.expiry,
        "name" => &card.name,
        _ => "",
    }
}

pub fn render(cards: &[CardRecord], format: OutputFormat, include_details: bool) -> Result<String> {
    let keys = output_keys(include_details);
    match format {
        OutputFormat::Json => render_json(cards, include_details),
        OutputFormat::Csv => render_csv(cards, keys),
        OutputFormat::Txt | OutputFormat::Plain => Ok(render_text(cards, keys)),
    }
}

#[derive(Serialize)]
struct JsonRow<'c> {
    #[serde(rename = "type")]
    network: &'c str,
    number: &'c str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cvv: Option<&'c str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiry: Option<&'c str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'c str>,
}

impl<'c> JsonRow<'c> {
    fn new(card: &'c CardRecord, include_details: bool) -> Self {
        let detail = |value: &'c String| include_details.then_some(value.as_str());
        Self {
            network: &card.network,
            number: &card.number,
            cvv: detail(&card.cvv),
            expiry: detail(&card.expiry),
            name: detail(&card.name),
        }
    }
}

fn render_json(cards: &[CardRecord], include_details: bool) -> Result<String> {
    let rows: Vec<JsonRow<'_>> = cards
        .iter()
        .map(|card| JsonRow::new(card, include_details))
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

fn render_csv(cards: &[CardRecord], keys: &[&str]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(keys)?;
    for card in cards {
        writer.write_record(keys.iter().map(|key| field(card, key)))?;
    }

    let bytes = writer.into_inner().map_err(|e| CardGenError::RenderError {
        message: format!("failed to flush CSV writer: {}", e),
    })?;
    let mut output = String::from_utf8(bytes).map_err(|e| CardGenError::RenderError {
        message: format!("CSV output is not UTF-8: {}", e),
    })?;

    if output.ends_with('\n') {
        output.pop();
    }
    Ok(output)
}

fn render_text(cards: &[CardRecord], keys: &[&str]) -> String {
    cards
        .iter()
        .map(|card| {
            keys.iter()
                .map(|key| field(card, key))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
