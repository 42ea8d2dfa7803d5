use crate::error::ModuleError;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Prefix the host uses for its own keys inside the args file.
const INTERNAL_PREFIX: &str = "_ansible_";
const CHECK_MODE_KEY: &str = "_ansible_check_mode";

/// One declared module option. Every option is of type `str`.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
}

/// Declared input schema of a module.
#[derive(Debug, Clone, Default)]
pub struct ArgumentSpec {
    pub options: Vec<OptionSpec>,
}

impl ArgumentSpec {
    pub fn new(options: Vec<OptionSpec>) -> Self {
        Self { options }
    }

    fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// Validated invocation: module params with defaults applied, plus the host flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleArgs {
    pub params: Map<String, Value>,
    pub check_mode: bool,
}

/// Read the args file the host hands to a binary module.
pub fn load_args(path: &Path) -> Result<Map<String, Value>, ModuleError> {
    let content = std::fs::read_to_string(path).map_err(|source| ModuleError::ArgsFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_args(&content, path)
}

/// JSON first; YAML as a fallback so hand-written args files work too.
pub fn parse_args(content: &str, path: &Path) -> Result<Map<String, Value>, ModuleError> {
    if content.trim().is_empty() {
        return Ok(Map::new());
    }
    let value: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(json_err) => {
            debug!("args file is not JSON ({}), trying YAML", json_err);
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| ModuleError::ArgsParse {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            yaml_to_json(yaml).map_err(|reason| ModuleError::ArgsParse {
                path: path.to_path_buf(),
                reason,
            })?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(ModuleError::ArgsParse {
            path: path.to_path_buf(),
            reason: format!("expected a mapping at the top level, got {}", type_name(&other)),
        }),
    }
}

/// serde_json has no room for non-finite floats, so those become the host's
/// string form ("inf", "-inf", "nan") instead of collapsing to null.
fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                match serde_json::Number::from_f64(f) {
                    Some(num) => Value::Number(num),
                    None if f.is_nan() => Value::String("nan".to_string()),
                    None if f.is_sign_negative() => Value::String("-inf".to_string()),
                    None => Value::String("inf".to_string()),
                }
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::new();
            for (k, v) in mapping {
                let key = match yaml_to_json(k)? {
                    Value::String(s) => s,
                    Value::Null | Value::Array(_) | Value::Object(_) => {
                        return Err("mapping keys must be scalars".to_string())
                    }
                    scalar => scalar.to_string(),
                };
                map.insert(key, yaml_to_json(v)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => return Err(format!("unsupported YAML tag {}", tagged.tag)),
    })
}

/// Check raw args against the spec: strip host keys, reject unknown keys,
/// apply defaults and coerce values to strings.
pub fn validate_args(
    module: &str,
    spec: &ArgumentSpec,
    raw: Map<String, Value>,
) -> Result<ModuleArgs, ModuleError> {
    let mut check_mode = false;
    let mut supplied = Map::new();

    for (key, value) in raw {
        if key == CHECK_MODE_KEY {
            check_mode = match value {
                Value::Bool(b) => b,
                Value::Null => false,
                other => return Err(ModuleError::InvalidCheckMode(other.to_string())),
            };
        } else if key.starts_with(INTERNAL_PREFIX) {
            debug!("ignoring host key {}", key);
        } else {
            supplied.insert(key, value);
        }
    }

    let mut unknown: Vec<&str> = supplied
        .keys()
        .filter(|k| spec.get(k).is_none())
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        unknown.sort_unstable();
        let mut supported: Vec<&str> = spec.options.iter().map(|o| o.name).collect();
        supported.sort_unstable();
        return Err(ModuleError::Unsupported {
            module: module.to_string(),
            keys: unknown.join(", "),
            supported: supported.join(", "),
        });
    }

    let mut params = Map::new();
    let mut missing = Vec::new();
    for opt in &spec.options {
        let value = match supplied.remove(opt.name) {
            Some(Value::Null) | None => None,
            Some(v) => Some(to_str(opt.name, v)?),
        };
        match value.or_else(|| opt.default.map(str::to_string)) {
            Some(s) => {
                params.insert(opt.name.to_string(), Value::String(s));
            }
            None if opt.required => missing.push(opt.name),
            None => {}
        }
    }
    if !missing.is_empty() {
        return Err(ModuleError::MissingRequired(missing.join(", ")));
    }

    Ok(ModuleArgs { params, check_mode })
}

/// Scalars convert the way the host renders them; containers are rejected.
fn to_str(name: &str, value: Value) -> Result<String, ModuleError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(true) => Ok("True".to_string()),
        Value::Bool(false) => Ok("False".to_string()),
        other => Err(ModuleError::Conversion {
            name: name.to_string(),
            kind: type_name(&other),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
