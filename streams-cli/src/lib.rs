//! Document-level operations behind the `streams` binary.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use streams_vocab::{Category, Resource, with_context};
use tracing::debug;

/// Output settings shared by every subcommand.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Indent the output.
    pub pretty: bool,
    /// Add the ActivityStreams `@context` to each top-level object.
    pub context: bool,
}

/// What `inspect` reports about one document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Summary {
    pub type_name: String,
    pub types: Vec<String>,
    pub category: String,
    pub id: Option<String>,
    pub public: bool,
    pub parts: Vec<String>,
    pub extension_keys: Vec<String>,
}

/// Reads a whole file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn parse(input: &str) -> Result<Vec<Resource>> {
    let value: Value = serde_json::from_str(input).context("Input is not valid JSON")?;
    let documents = match value {
        Value::Array(items) => items,
        single => vec![single],
    };
    debug!("Decoding {} document(s)", documents.len());
    documents
        .iter()
        .enumerate()
        .map(|(i, doc)| Resource::from_value(doc).with_context(|| format!("Document {i} is not an ActivityStreams object")))
        .collect()
}

fn render(value: &Value, options: &Options) -> Result<String> {
    let out = if options.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

/// Decodes one document, or an array of documents, and writes it back in
/// normal form: single-element arrays collapsed, `type` completed, unknown
/// keys kept.
pub fn normalize(input: &str, options: &Options) -> Result<String> {
    let resources = parse(input)?;
    let mut values = resources
        .iter()
        .map(|resource| -> Result<Value> {
            let map = resource.to_map()?;
            let map = if options.context { with_context(map) } else { map };
            Ok(Value::Object(map))
        })
        .collect::<Result<Vec<_>>>()?;
    let value = if values.len() == 1 && !input.trim_start().starts_with('[') {
        values.remove(0)
    } else {
        Value::Array(values)
    };
    render(&value, options)
}

/// Summarizes each document in `input`.
pub fn inspect(input: &str) -> Result<Vec<Summary>> {
    Ok(parse(input)?.iter().map(summarize).collect())
}

/// Renders summaries as JSON.
pub fn render_summaries(summaries: &[Summary], options: &Options) -> Result<String> {
    render(&serde_json::to_value(summaries)?, options)
}

fn summarize(resource: &Resource) -> Summary {
    Summary {
        type_name: resource.type_name().to_string(),
        types: resource.types().to_vec(),
        category: match resource.category() {
            Category::Object => "Object".to_string(),
            Category::Link => "Link".to_string(),
        },
        id: resource.id().map(ToString::to_string),
        public: resource.is_public(),
        parts: resource.parts().names().into_iter().map(str::to_string).collect(),
        extension_keys: resource.unknown().iter().map(|(k, _)| k.to_string()).collect(),
    }
}
