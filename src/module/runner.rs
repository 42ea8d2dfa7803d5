use crate::error::ModuleError;
use crate::module::args::{load_args, validate_args};
use crate::module::Module;
use serde_json::{json, Map, Value};
use std::path::Path;
use tracing::{info, warn};

/// What the harness writes to stdout, one JSON object per invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `exit_json`: the module's own result object.
    Exit(Value),
    /// Check mode requested on a module that cannot honor it.
    Skipped(String),
    /// `fail_json`
    Failed(String),
}

impl Outcome {
    pub fn to_json(&self) -> Value {
        match self {
            Outcome::Exit(v) => v.clone(),
            Outcome::Skipped(msg) => json!({ "changed": false, "skipped": true, "msg": msg }),
            Outcome::Failed(msg) => json!({ "failed": true, "msg": msg }),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Failed(_) => 1,
            _ => 0,
        }
    }
}

/// Load the args file and run `module` against it.
pub fn execute_file<M: Module>(module: &M, path: &Path) -> Outcome {
    match load_args(path) {
        Ok(raw) => execute(module, raw),
        Err(e) => fail(module, e.into()),
    }
}

/// Validate raw args, route check mode and run the module.
pub fn execute<M: Module>(module: &M, raw: Map<String, Value>) -> Outcome {
    let args = match validate_args(module.name(), &module.argument_spec(), raw) {
        Ok(a) => a,
        Err(e) => return fail(module, e.into()),
    };

    if args.check_mode && !module.supports_check_mode() {
        info!("{}: check mode not supported, skipping", module.name());
        return Outcome::Skipped(format!(
            "remote module ({}) does not support check mode",
            module.name()
        ));
    }

    let params: M::Params = match serde_json::from_value(Value::Object(args.params)) {
        Ok(p) => p,
        Err(e) => return fail(module, ModuleError::from(e).into()),
    };

    let output = module
        .run(params, args.check_mode)
        .and_then(|out| serde_json::to_value(out).map_err(anyhow::Error::from));
    match output {
        Ok(v) => Outcome::Exit(v),
        Err(e) => fail(module, e),
    }
}

fn fail<M: Module>(module: &M, err: anyhow::Error) -> Outcome {
    warn!("{} failed: {:#}", module.name(), err);
    Outcome::Failed(format!("{:#}", err))
}
