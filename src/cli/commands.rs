//! Command dispatch: one handler per subcommand

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{run_expression, run_interactive, ApplicationError, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands, OrderArg};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::ExprBuilder;

/// Run the parsed command against the process stdin and stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();
    let result = execute_command_with(cli, &mut input, &mut stdout);
    let flushed = stdout.flush();
    result?;
    flushed.with_context("flush stdout")?;
    Ok(())
}

/// Run the parsed command, reading dialogue answers from `input` and writing
/// everything except errors and hints to `out`.
pub fn execute_command_with<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    // these must work without a loadable config
    match &cli.command {
        Some(Commands::Completion { shell }) => return cmd_completion(*shell, out),
        Some(Commands::Config {
            command: ConfigCommands::Path,
        }) => return cmd_config_path(cli.config.as_deref(), out),
        Some(Commands::Config {
            command: ConfigCommands::Init { force },
        }) => return cmd_config_init(cli.config.as_deref(), *force, out),
        _ => {}
    }

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.strict {
        settings.strict = true;
    }
    debug!(?settings, "settings loaded");

    match &cli.command {
        Some(Commands::Eval { expression }) => cmd_eval(expression.as_deref(), &settings, out),
        Some(Commands::Render { expression, order }) => {
            cmd_render(expression, *order, &settings, out)
        }
        Some(Commands::Tree { expression }) => cmd_tree(expression, &settings, out),
        Some(Commands::Interactive) | None => cmd_interactive(&settings, input, out),
        Some(Commands::Config {
            command: ConfigCommands::Show,
        }) => cmd_config_show(&settings, out),
        Some(Commands::Config { .. }) | Some(Commands::Completion { .. }) => {
            unreachable!("dispatched before loading settings")
        }
    }
}

#[instrument(level = "debug", skip(settings, out))]
fn cmd_eval(expression: Option<&str>, settings: &Settings, out: &mut impl Write) -> CliResult<()> {
    let expression = expression.map_or(settings.sample_expression.as_str(), str::trim);
    let report = run_expression(expression, settings)?;
    report
        .write_to(out, settings.precision)
        .with_context("write report")?;
    Ok(())
}

#[instrument(level = "debug", skip(settings, out))]
fn cmd_render(
    expression: &str,
    order: OrderArg,
    settings: &Settings,
    out: &mut impl Write,
) -> CliResult<()> {
    let tree = ExprBuilder::new()
        .with_strict(settings.strict)
        .build(expression.trim())
        .map_err(ApplicationError::from)?;
    output::info(out, &tree.render(order.into())).with_context("write rendering")?;
    Ok(())
}

#[instrument(level = "debug", skip(settings, out))]
fn cmd_tree(expression: &str, settings: &Settings, out: &mut impl Write) -> CliResult<()> {
    let tree = ExprBuilder::new()
        .with_strict(settings.strict)
        .build(expression.trim())
        .map_err(ApplicationError::from)?;
    write!(out, "{}", tree.to_display_tree()).with_context("write tree")?;
    Ok(())
}

fn cmd_interactive<R: BufRead, W: Write>(
    settings: &Settings,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    match run_interactive(input, out, settings) {
        Ok(_) => Ok(()),
        Err(e) if e.is_expression_error() => Err(CliError::Reported(e)),
        Err(e) => Err(e.into()),
    }
}

fn cmd_config_show(settings: &Settings, out: &mut impl Write) -> CliResult<()> {
    output::info(out, &settings.to_toml()?).with_context("write settings")?;
    Ok(())
}

fn cmd_config_path(explicit: Option<&Path>, out: &mut impl Write) -> CliResult<()> {
    let written = match global_config_path() {
        Some(path) => {
            let state = if path.exists() { "" } else { " (not found)" };
            output::action(out, "global", &format!("{}{}", path.display(), state))
        }
        None => output::action(out, "global", "unavailable (no home directory)"),
    };
    written.with_context("write config paths")?;
    if let Some(path) = explicit {
        output::action(out, "explicit", &path.display()).with_context("write config paths")?;
    }
    Ok(())
}

fn cmd_config_init(explicit: Option<&Path>, force: bool, out: &mut impl Write) -> CliResult<()> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => global_config_path()
            .ok_or_else(|| CliError::InvalidArgs("no home directory; pass --config".into()))?,
    };
    if path.exists() && !force {
        return Err(CliError::InvalidArgs(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(&format!("create {}", parent.display()))?;
    }
    fs::write(&path, Settings::template()).with_context(&format!("write {}", path.display()))?;
    output::success(out, &format!("Created {}", path.display()))
        .with_context("write status")?;
    Ok(())
}

fn cmd_completion<W: Write>(shell: Shell, out: &mut W) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}
