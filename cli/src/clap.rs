use anstyle::{AnsiColor, Effects, Style};
use clap::{Arg, ArgAction, Command, builder::Styles};

pub const HEADER: Style = AnsiColor::Magenta.on_default().effects(Effects::BOLD);
pub const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
pub const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
pub const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
pub const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
pub const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
pub const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

pub fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::SetTrue)
}

pub fn cli() -> Command {
    let styles = Styles::styled()
        .header(HEADER)
        .usage(USAGE)
        .literal(LITERAL)
        .placeholder(PLACEHOLDER)
        .error(ERROR)
        .valid(VALID)
        .invalid(INVALID);

    Command::new("autonym")
        .about("Print every two-letter language code whose autonym is not the code itself")
        .version(env!("CARGO_PKG_VERSION"))
        .styles(styles)
        .arg(flag("verbose", "Log each code with an autonym").short('v'))
        .arg(flag("no-color", "Disable colored diagnostics"))
        .arg(flag("time", "Log the time taken by the probe").short('t'))
        .arg(flag("no-backtrace", "Do not print a backtrace on panic"))
}
