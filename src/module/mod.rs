pub mod args;
pub mod runner;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use args::{ArgumentSpec, OptionSpec};

/// A binary module the host can invoke. The harness in [`runner`] validates
/// the raw args against `argument_spec`, deserializes them into `Params` and
/// serializes the returned `Output` as the `exit_json` payload.
pub trait Module {
    type Params: DeserializeOwned;
    type Output: Serialize;

    fn name(&self) -> &str;
    fn argument_spec(&self) -> ArgumentSpec;
    fn supports_check_mode(&self) -> bool;
    fn run(&self, params: Self::Params, check_mode: bool) -> anyhow::Result<Self::Output>;
}
