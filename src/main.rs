// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the ci-matrix binary.
//!
//! Invoked without a subcommand, the binary generates matrices and appends
//! them to the workflow sinks. The `show` subcommand prints the plan instead.

use std::{io, process};

use ci_matrix::{
    Error, MatrixPlan, SUCCESS_MESSAGE, Settings, plan_from_settings, run, serialize_error,
    stdout_error,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Command line interface for generating CI test matrices.
#[derive(Debug, Parser,)]
#[command(name = "ci-matrix", version, about = "Generate CI test matrices")]
struct Cli
{
    #[command(subcommand)]
    command: Option<Command,>,

    #[command(flatten)]
    settings: Settings,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Print the generated plan as JSON without writing workflow files.
    Show(ShowArgs,),
}

#[derive(Debug, Args,)]
struct ShowArgs
{
    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = execute() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Installs a stderr subscriber so stdout stays reserved for results.
fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration parse failures and sink write errors.
fn execute() -> Result<(), Error,>
{
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Show(args,),) => run_show(&cli.settings, args.pretty,),
        None => run_generate(&cli.settings,),
    }
}

fn run_generate(settings: &Settings,) -> Result<(), Error,>
{
    run(settings,)?;
    println!("{SUCCESS_MESSAGE}");
    Ok((),)
}

fn run_show(settings: &Settings, pretty: bool,) -> Result<(), Error,>
{
    let plan = plan_from_settings(settings,)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_plan(&mut handle, &plan, pretty,)
}

fn write_plan<W: io::Write,>(writer: &mut W, plan: &MatrixPlan, pretty: bool,) -> Result<(), Error,>
{
    let encoded = if pretty {
        serde_json::to_string_pretty(plan,).map_err(serialize_error,)?
    } else {
        serde_json::to_string(plan,).map_err(serialize_error,)?
    };
    writeln!(writer, "{encoded}").map_err(stdout_error,)
}
