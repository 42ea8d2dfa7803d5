mod cli;
mod docs;
mod error;
mod hello;
mod module;

use anyhow::Context;
use module::runner::{execute_file, Outcome};
use module::Module;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // stdout carries the result JSON, so logs go to stderr
    let filter = EnvFilter::try_from_env("DEMO_HELLO_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let demo = hello::DemoHello;
    match cli::get_command() {
        cli::Command::Run(path) => {
            info!("running {} with args from {:?}", demo.name(), path);
            let outcome = execute_file(&demo, &path);
            emit(&outcome)?;
            std::process::exit(outcome.exit_code());
        }
        cli::Command::Doc => {
            let yaml = docs::render_yaml(&demo.doc())
                .context("rendering module documentation failed")?;
            print!("{}", yaml);
        }
        cli::Command::Usage(msg) => {
            eprintln!("{}", cli::USAGE);
            let outcome = Outcome::Failed(msg);
            emit(&outcome)?;
            std::process::exit(outcome.exit_code());
        }
    }

    Ok(())
}

fn emit(outcome: &Outcome) -> anyhow::Result<()> {
    let line = serde_json::to_string(&outcome.to_json())
        .context("serializing module result failed")?;
    println!("{}", line);
    Ok(())
}
