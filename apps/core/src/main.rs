// Code Evolver CLI Entry Point
// One evolve request per invocation, or local analysis without the model.

use anyhow::Context;
use clap::{Parser, Subcommand};
use code_evolver_core::analysis::CodeAnalyzer;
use code_evolver_core::input::load_code;
use code_evolver_core::prompt::{build_prompt, PromptStyle};
use code_evolver_core::report::{render_comparison, render_outcome};
use code_evolver_core::session::status_for_error;
use code_evolver_core::telemetry::{self, LogFormat};
use code_evolver_core::{EvolverHandle, ModelConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "code-evolver")]
#[command(about = "Suggest a faster rewrite of a code snippet and compare both versions", long_about = None)]
struct Cli {
    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct CodeInput {
    /// Read the code sample from this file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Code sample passed inline; stdin is read when neither is given
    code: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the model for a rewrite and compare it with the original
    Evolve {
        #[command(flatten)]
        input: CodeInput,

        /// Override EVOLVER_PROMPT_STYLE
        #[arg(short, long, value_enum)]
        style: Option<PromptStyle>,

        /// Override EVOLVER_MODEL
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Analyze a code sample locally
    Analyze {
        #[command(flatten)]
        input: CodeInput,
    },

    /// Compare two local files without calling the model
    Compare {
        /// Original code
        #[arg(short, long)]
        original: PathBuf,

        /// Rewritten code
        #[arg(short, long)]
        evolved: PathBuf,
    },

    /// Print the prompt that would be sent
    Prompt {
        #[command(flatten)]
        input: CodeInput,

        #[arg(short, long, value_enum, default_value_t = PromptStyle::Simple)]
        style: PromptStyle,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    telemetry::init("code-evolver", cli.log_format, "info")?;

    match cli.command {
        Commands::Evolve { input, style, model } => {
            let code = load_code(input.file.as_deref(), input.code.as_deref())?;

            let mut config = ModelConfig::from_env().context("Failed to load model configuration")?;
            if let Some(style) = style {
                config.prompt_style = style;
            }
            if let Some(model) = model {
                config.model_id = model;
            }
            info!(model = %config.model_id, style = %config.prompt_style, "Configuration loaded");

            let evolver = EvolverHandle::new(&config)?;
            let result = evolver.evolve(code).await;
            let view = evolver.view();

            match result {
                Ok(outcome) => {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&outcome)?);
                    } else {
                        println!("{}", render_outcome(&outcome));
                    }
                    eprintln!("{}", view.status);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{}", status_for_error(&e));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Analyze { input } => {
            let code = load_code(input.file.as_deref(), input.code.as_deref())?;
            let report = CodeAnalyzer::new().analyze(&code);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Lines        {}", report.lines);
                println!("Complexity   {}", report.complexity);
                println!("Readability  {}", report.readability);
                println!("Time         {}", report.big_o);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Compare { original, evolved } => {
            let original_code = load_code(Some(&original), None)?;
            let evolved_code = load_code(Some(&evolved), None)?;
            let comparison = CodeAnalyzer::new().compare(&original_code, &evolved_code);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print!("{}", render_comparison(&comparison));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Prompt { input, style } => {
            let code = load_code(input.file.as_deref(), input.code.as_deref())?;
            println!("{}", build_prompt(style, &code));
            Ok(ExitCode::SUCCESS)
        }
    }
}
