use crate::cli::OutputFormat;
use crate::core::{ExportDocument, TeamExport};
use crate::errors::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

pub trait OutputWriter {
    /// Write a full `team -> export` document.
    fn write_document(&mut self, document: &ExportDocument) -> Result<()>;

    /// Write a single team's export without the team key.
    fn write_team(&mut self, export: &TeamExport) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        value.serialize(&mut ser)?;
        buf.push(b'\n');
        self.writer.write_all(&buf)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_document(&mut self, document: &ExportDocument) -> Result<()> {
        self.write_json(document)
    }

    fn write_team(&mut self, export: &TeamExport) -> Result<()> {
        self.write_json(export)
    }
}

pub struct YamlWriter<W: Write> {
    writer: W,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_yaml<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let yaml = serde_yaml::to_string(value)?;
        self.writer.write_all(yaml.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for YamlWriter<W> {
    fn write_document(&mut self, document: &ExportDocument) -> Result<()> {
        self.write_yaml(document)
    }

    fn write_team(&mut self, export: &TeamExport) -> Result<()> {
        self.write_yaml(export)
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Yaml => Box::new(YamlWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn sample() -> ExportDocument {
        let mut export = TeamExport::new();
        let vars: BTreeMap<String, String> =
            [("REPLICAS".to_string(), "3".to_string())].into_iter().collect();
        export.insert("eu", "api", vars);
        let mut doc = ExportDocument::new();
        doc.insert("payments", export);
        doc
    }

    fn render(format: OutputFormat, doc: &ExportDocument) -> String {
        let mut buf = Vec::new();
        create_writer(format, Box::new(&mut buf))
            .write_document(doc)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_json_uses_four_space_indent() {
        let expected = "{\n    \"payments\": {\n        \"eu\": {\n            \"api\": {\n                \"REPLICAS\": \"3\"\n            }\n        }\n    }\n}\n";
        assert_eq!(render(OutputFormat::Json, &sample()), expected);
    }

    #[test]
    fn test_yaml_is_block_style() {
        let yaml = render(OutputFormat::Yaml, &sample());
        assert!(yaml.starts_with("payments:\n  eu:\n    api:\n"));
        assert!(!yaml.contains('{'));
    }

    #[test]
    fn test_write_team_omits_team_key() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_team(sample().get("payments").unwrap())
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value, serde_json::json!({"eu": {"api": {"REPLICAS": "3"}}}));
    }

    fn document_strategy() -> impl Strategy<Value = ExportDocument> {
        let vars = prop::collection::btree_map("[A-Z][A-Z_]{0,7}", "[a-zA-Z0-9 :#/._-]{0,12}", 0..4);
        let deployments = prop::collection::btree_map("[a-z][a-z_]{0,7}", vars, 0..3);
        let clusters = prop::collection::btree_map("[a-z]{1,6}", deployments, 0..3);
        let teams = prop::collection::btree_map("[a-z][a-z-]{0,9}", clusters, 0..4);
        teams.prop_map(|teams| ExportDocument {
            teams: teams
                .into_iter()
                .map(|(team, clusters)| (team, TeamExport { clusters }))
                .collect(),
        })
    }

    proptest! {
        #[test]
        fn prop_json_and_yaml_describe_same_structure(doc in document_strategy()) {
            let json = render(OutputFormat::Json, &doc);
            let yaml = render(OutputFormat::Yaml, &doc);

            let from_json: ExportDocument = serde_json::from_str(&json).unwrap();
            let from_yaml: ExportDocument = serde_yaml::from_str(&yaml).unwrap();
            prop_assert_eq!(&from_json, &doc);
            prop_assert_eq!(from_json, from_yaml);
        }
    }
}
