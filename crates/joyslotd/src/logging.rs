// Colorized wrappers for logging

use fern::Dispatch;

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {{
        use colored::Colorize as _;
        let message = format!($($arg)*);
        log::error!("{}", message.bright_red());
    }}
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        log::info!("{message}");
    }}
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {{
        use colored::Colorize as _;
        let message = format!($($arg)*);
        log::debug!("{}", message.dimmed());
    }}
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => {{
        use colored::Colorize as _;
        let message = format!($($arg)*);
        log::warn!("{}", message.bright_yellow());
    }}
}

/// Setup the logger.
pub(crate) fn setup(verbose: bool, no_color: bool) {
    let log_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    Dispatch::new()
        .format(|out, message, _record| {
            let now = chrono::Local::now().format("%Y.%m.%d %H:%M:%S");
            out.finish(format_args!("[{now}] {message}"));
        })
        .level(log::LevelFilter::Warn)
        .level_for("joyslotd", log_level)
        .level_for("joyslot_gamepad", log_level)
        .level_for("joyslot_settings", log_level)
        .chain(std::io::stdout())
        .apply()
        .expect("Unable to set up logger");

    if no_color {
        colored::control::set_override(false);
    }
}
