use clap::ArgMatches;
use log::LevelFilter;

/// Diagnostic settings taken from the command line. None of them touch the
/// report on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub level: LevelFilter,
    pub color: bool,
    pub time: bool,
    pub backtrace: bool,
}

impl Config {
    pub fn from_matches(args: &ArgMatches) -> Self {
        let time = args.get_flag("time");
        let level = if args.get_flag("verbose") {
            LevelFilter::Debug
        } else if time {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        };

        Config {
            level,
            color: !args.get_flag("no-color"),
            time,
            backtrace: !args.get_flag("no-backtrace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clap::cli;

    fn config(args: &[&str]) -> Config {
        Config::from_matches(&cli().try_get_matches_from(args).unwrap())
    }

    #[test]
    fn defaults_log_warnings_only() {
        assert_eq!(
            config(&["autonym"]),
            Config { level: LevelFilter::Warn, color: true, time: false, backtrace: true }
        );
    }

    #[test]
    fn time_raises_the_level_to_info() {
        assert_eq!(config(&["autonym", "-t"]).level, LevelFilter::Info);
        assert_eq!(config(&["autonym", "-t", "-v"]).level, LevelFilter::Debug);
    }

    #[test]
    fn color_and_backtrace_can_be_disabled() {
        let config = config(&["autonym", "--no-color", "--no-backtrace"]);
        assert!(!config.color);
        assert!(!config.backtrace);
    }
}
