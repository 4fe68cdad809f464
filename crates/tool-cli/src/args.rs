//! Superficie de línea de comandos.
//!
//! `toolflow <ruta-herramienta> <entradas...> [opciones]`
//!
//! Las entradas son los tokens iniciales que no empiezan por `-`. Opciones:
//! `-o|--output-dir <dir>`, `--single-output`, `--config <nombre>` y
//! cualquier número de `-c:<campo> <valor>` / `-c:<Tipo>:<campo> <valor>`.
use std::path::PathBuf;

use thiserror::Error;
use tool_core::constants::OVERRIDE_PREFIX;

pub const USAGE: &str = "Uso: toolflow <tool> <inputs...> [-o <dir>] [--single-output] [--config <name>] [-c:<field> <value>]...\n       toolflow --list";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing tool name")]
    MissingTool,
    #[error("no input files given")]
    NoInputs,
    #[error("option '{0}' requires a value")]
    MissingValue(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}' after options")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub tool: String,
    pub inputs: Vec<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub single_output: bool,
    pub config: Option<String>,
    pub overrides: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Help,
    Run(RunArgs),
}

/// `args` sin el nombre del ejecutable.
pub fn parse(args: &[String]) -> Result<Command, ArgsError> {
    let Some(first) = args.first() else {
        return Err(ArgsError::MissingTool);
    };
    match first.as_str() {
        "--list" | "list" => return Ok(Command::List),
        "-h" | "--help" | "help" => return Ok(Command::Help),
        s if s.starts_with('-') => return Err(ArgsError::MissingTool),
        _ => {}
    }

    let mut run = RunArgs { tool: first.clone(),
                            inputs: Vec::new(),
                            output_dir: None,
                            single_output: false,
                            config: None,
                            overrides: Vec::new() };
    let mut i = 1;
    while i < args.len() && !args[i].starts_with('-') {
        run.inputs.push(PathBuf::from(&args[i]));
        i += 1;
    }
    if run.inputs.is_empty() {
        return Err(ArgsError::NoInputs);
    }

    while i < args.len() {
        let arg = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i).cloned().ok_or_else(|| ArgsError::MissingValue(arg.to_string()))
        };
        match arg {
            "-o" | "--output-dir" => run.output_dir = Some(PathBuf::from(value()?)),
            "--single-output" => run.single_output = true,
            "--config" => run.config = Some(value()?),
            key if is_override(key) => {
                let v = value()?;
                run.overrides.push((key.to_string(), v));
            }
            other if other.starts_with('-') => return Err(ArgsError::UnknownOption(other.to_string())),
            other => return Err(ArgsError::UnexpectedArgument(other.to_string())),
        }
        i += 1;
    }
    Ok(Command::Run(run))
}

fn is_override(arg: &str) -> bool {
    arg.len() > OVERRIDE_PREFIX.len()
    && arg.get(..OVERRIDE_PREFIX.len()).is_some_and(|head| head.eq_ignore_ascii_case(OVERRIDE_PREFIX))
}
