use crate::docs::{options_doc, Documentation, ExampleTask, ModuleDoc, ReturnDoc};
use crate::module::{ArgumentSpec, Module, OptionSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Greeting template; `{name}` is replaced verbatim.
pub const FACT_TEMPLATE: &str = "Hello {name}!";
pub const DEFAULT_NAME: &str = "John Doe";

pub fn format_greeting(name: &str) -> String {
    FACT_TEMPLATE.replace("{name}", name)
}

#[derive(Debug, Clone, Deserialize)]
pub struct HelloParams {
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl Default for HelloParams {
    fn default() -> Self {
        Self { name: default_name() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelloResult {
    pub changed: bool,
    pub fact: String,
}

/// Read-only module that reports a greeting as a fact.
pub struct DemoHello;

impl DemoHello {
    pub fn doc(&self) -> ModuleDoc {
        let name = self.name().to_string();

        let mut args = BTreeMap::new();
        args.insert("name".to_string(), "Linus Torvalds".to_string());
        let mut invocation = BTreeMap::new();
        invocation.insert(name.clone(), args);

        let mut returns = BTreeMap::new();
        returns.insert(
            "fact".to_string(),
            ReturnDoc {
                description: "Hello string".to_string(),
                kind: "str".to_string(),
                sample: format_greeting(DEFAULT_NAME),
            },
        );

        ModuleDoc {
            documentation: Documentation {
                module: name,
                short_description: "A module that says hello".to_string(),
                version_added: "2.8".to_string(),
                description: vec!["A module that says hello.".to_string()],
                options: options_doc(&self.argument_spec()),
                author: vec!["Gianni Salinetti (@giannisalinetti)".to_string()],
            },
            examples: vec![ExampleTask {
                name: "Say hello to Linus Torvalds".to_string(),
                invocation,
            }],
            returns,
        }
    }
}

impl Module for DemoHello {
    type Params = HelloParams;
    type Output = HelloResult;

    fn name(&self) -> &str {
        "demo_hello"
    }

    fn argument_spec(&self) -> ArgumentSpec {
        ArgumentSpec::new(vec![OptionSpec {
            name: "name",
            description: "Name of the person to salute. \
                If no value is provided the default value will be used.",
            required: false,
            default: Some(DEFAULT_NAME),
        }])
    }

    fn supports_check_mode(&self) -> bool {
        true
    }

    fn run(&self, params: HelloParams, check_mode: bool) -> anyhow::Result<HelloResult> {
        let result = HelloResult {
            changed: false,
            fact: format_greeting(&params.name),
        };

        if check_mode {
            debug!("check mode, returning before commit");
            return Ok(result);
        }

        // nothing to commit: the module never touches the target
        debug!("commit step is a no-op");
        Ok(result)
    }
}
