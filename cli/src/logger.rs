use autonym_core::AResult;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Diagnostics go to stderr; stdout is reserved for the report.
pub fn init_logger(level: LevelFilter, color: bool) -> AResult<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    Ok(Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level();
            let level = if color { colors.color(level).to_string() } else { level.to_string() };

            out.finish(format_args!("{} {message}", level.to_ascii_lowercase()))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?)
}
