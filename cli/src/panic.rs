use colored::Colorize;
use std::path::{Path, PathBuf};
use sysinfo::System;
use terminal_size::{Width, terminal_size};

/// Frames from these places are folded into a single line.
const RUNTIME_PATHS: &[&str] =
    &["/rustc/", "\\rustc\\", "/.cargo/registry/", "\\.cargo\\registry\\"];

const RUNTIME_SYMBOLS: &[&str] =
    &["std::", "core::", "alloc::", "backtrace::", "__rust", "_start", "__libc_start"];

pub fn setup_panic_handler(no_backtrace: bool) {
    std::panic::set_hook(Box::new(move |info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown error".to_string());
        let location = info
            .location()
            .map_or_else(String::new, |loc| format!("{}:{}", loc.file(), loc.line()))
            .replace('\\', "/");

        let width = terminal_size().map_or(80, |(Width(w), _)| usize::from(w));
        let divider = "━".repeat(width).bright_red();
        let title = format!("{:^width$}", " autonym panicked ").bright_red().bold();

        let mut text = format!(
            "{divider}\n{title}\n\n{}\n\n{}\n",
            system_info(&location),
            message.bright_red().bold()
        );

        if !no_backtrace {
            text.push_str(&format_backtrace());
        }
        text.push_str(&format!("{divider}\n"));

        eprint!("{text}");
    }))
}

fn system_info(location: &str) -> String {
    let os = format!(
        "{} {} {}",
        System::name().unwrap_or_else(|| "unknown".to_string()),
        System::cpu_arch(),
        System::os_version().unwrap_or_else(|| "unknown".to_string())
    );

    [
        ("VERSION", env!("CARGO_PKG_VERSION").to_string()),
        ("SYSTEM", os),
        ("LOCATION", location.underline().to_string()),
    ]
    .iter()
    .map(|(key, value)| format!("{key}: {value}").dimmed().to_string())
    .collect::<Vec<_>>()
    .join("\n")
}

fn format_backtrace() -> String {
    let mut out = String::new();
    let mut folded = 0usize;

    let flush_folded = |out: &mut String, folded: &mut usize| {
        if *folded > 0 {
            let note = format!("... {folded} runtime frames ...");
            out.push_str(&format!("  {}\n", note.bright_magenta().italic()));
            *folded = 0;
        }
    };

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            let name = symbol.name().map(|name| name.to_string());
            let file = symbol.filename().map(|f| f.to_string_lossy().to_string());

            let runtime = name.as_deref().is_none_or(is_runtime_symbol)
                || file.as_deref().is_some_and(|file| RUNTIME_PATHS.iter().any(|p| file.contains(p)));

            if runtime {
                folded += 1;
                return;
            }

            flush_folded(&mut out, &mut folded);

            let mut line = format!("at {}", name.unwrap_or_default().dimmed());
            if let Some(file) = file {
                line.push_str(&format!(
                    " ({}:{})",
                    shorten_path(Path::new(&file)).display(),
                    symbol.lineno().unwrap_or(0)
                ));
            }
            out.push_str(&format!("  {} {}\n", "→".bright_green(), line.cyan()));
        });
        true
    });
    flush_folded(&mut out, &mut folded);

    out
}

fn is_runtime_symbol(name: &str) -> bool {
    let name = name.trim_start_matches('<');
    RUNTIME_SYMBOLS.iter().any(|prefix| name.starts_with(prefix))
}

/// Strips the `/rustc/<hash>/` prefix toolchain sources are reported under.
pub fn shorten_path(path: &Path) -> PathBuf {
    let skip = if path.starts_with("/rustc/") || path.starts_with("\\rustc\\") { 3 } else { 0 };
    path.iter().skip(skip).collect()
}
