//! Sub-command table for the `vsharp` binary.
//!
//! The table is built by [`commands`] at startup and handed to
//! [`dispatch`]; nothing is registered globally.

use std::io::Write;

use crate::{Error, version};

/// Entry point of a sub-command. Receives the arguments after the
/// command name and the stream to print to.
pub type Handler = fn(&[String], &mut dyn Write) -> Result<(), Error>;

/// A named sub-command.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub run: Handler,
}

/// The commands understood by `vsharp`.
#[must_use]
pub fn commands() -> Vec<Command> {
    vec![
        Command {
            name: "compile",
            description: "Compile VSharp",
            run: compile,
        },
        Command {
            name: "version",
            description: "Print the VSharp compiler version.",
            run: print_version,
        },
    ]
}

/// Run the command named by `args[1]`, where `args` is the full
/// argument vector including the program name.
///
/// A missing or unknown command does nothing.
pub fn dispatch(args: &[String], commands: &[Command], out: &mut dyn Write) -> Result<(), Error> {
    let Some(name) = args.get(1) else {
        tracing::debug!("no command given");
        return Ok(());
    };

    let Some(command) = commands.iter().find(|c| c.name == name.as_str()) else {
        tracing::debug!(command = %name, "unknown command");
        return Ok(());
    };

    tracing::debug!(command = command.name, "dispatching");
    (command.run)(&args[2..], out)
}

/// `compile <path>`: print every token, then every diagnostic.
fn compile(args: &[String], out: &mut dyn Write) -> Result<(), Error> {
    let Some(path) = args.first() else {
        return Ok(());
    };

    let lexed = crate::tokenize_file(path)?;
    for token in &lexed.tokens {
        writeln!(out, "{token}").map_err(Error::Output)?;
    }
    for diagnostic in &lexed.diagnostics {
        writeln!(out, "{diagnostic}").map_err(Error::Output)?;
    }
    Ok(())
}

fn print_version(_args: &[String], out: &mut dyn Write) -> Result<(), Error> {
    writeln!(out, "{}", version::full_version()).map_err(Error::Output)
}
