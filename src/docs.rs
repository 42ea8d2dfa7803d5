use crate::module::ArgumentSpec;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct ModuleDoc {
    pub documentation: Documentation,
    pub examples: Vec<ExampleTask>,
    #[serde(rename = "return")]
    pub returns: BTreeMap<String, ReturnDoc>,
}

#[derive(Debug, Serialize)]
pub struct Documentation {
    pub module: String,
    pub short_description: String,
    pub version_added: String,
    pub description: Vec<String>,
    pub options: BTreeMap<String, OptionDoc>,
    pub author: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OptionDoc {
    pub description: Vec<String>,
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExampleTask {
    pub name: String,
    #[serde(flatten)]
    pub invocation: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
pub struct ReturnDoc {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub sample: String,
}

/// Option docs straight from the argument spec, so the two cannot drift.
pub fn options_doc(spec: &ArgumentSpec) -> BTreeMap<String, OptionDoc> {
    spec.options
        .iter()
        .map(|o| {
            let doc = OptionDoc {
                description: vec![o.description.to_string()],
                required: o.required,
                kind: "str".to_string(),
                default: o.default.map(str::to_string),
            };
            (o.name.to_string(), doc)
        })
        .collect()
}

pub fn render_yaml(doc: &ModuleDoc) -> anyhow::Result<String> {
    Ok(serde_yaml::to_string(doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::OptionSpec;

    #[test]
    fn options_doc_mirrors_spec() {
        let spec = ArgumentSpec::new(vec![
            OptionSpec {
                name: "path",
                description: "target file",
                required: true,
                default: None,
            },
            OptionSpec {
                name: "mode",
                description: "permissions",
                required: false,
                default: Some("0644"),
            },
        ]);
        let docs = options_doc(&spec);
        assert!(docs["path"].required);
        assert_eq!(docs["path"].default, None);
        assert_eq!(docs["mode"].default.as_deref(), Some("0644"));
        assert_eq!(docs["mode"].kind, "str");
        assert_eq!(docs["mode"].description, vec!["permissions".to_string()]);
    }
}
