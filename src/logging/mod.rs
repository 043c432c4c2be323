mod connected_to_journal;

use std::{io::Write as _, time::SystemTime};

use anstyle::{AnsiColor, Effects};
use connected_to_journal::connected_to_journal;
use env_logger::Env;
use log::{
    Record,
    kv::{Key, Source as _},
};

/// Prefix naming the account a record concerns, taken from its `account` key-value.
fn account_prefix(record: &Record<'_>) -> String {
    record
        .key_values()
        .get(Key::from_str("account"))
        .map(|account| format!("{account} "))
        .unwrap_or_default()
}

/// Installs the global logger. Records logged with an `account` key-value are prefixed with
/// that account.
pub fn init() {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if connected_to_journal() {
        builder.format(move |buf, record| {
            writeln!(
                buf,
                "<{}>{}{}: {}",
                match record.level() {
                    log::Level::Error => 3,
                    log::Level::Warn => 4,
                    log::Level::Info => 6,
                    log::Level::Debug | log::Level::Trace => 7,
                },
                account_prefix(record),
                record.target(),
                record.args()
            )
        });
    } else {
        let subtle = AnsiColor::BrightBlack.on_default();
        builder.format(move |buf, record| {
            write!(buf, "{subtle}[{subtle:#}")?;
            if let Ok(now) = jiff::Timestamp::try_from(SystemTime::now()) {
                write!(buf, "{now:.3} ")?;
            } else {
                write!(buf, "timestamp_error ")?;
            }
            let level_style = match record.level() {
                log::Level::Error => AnsiColor::Red.on_default().effects(Effects::BOLD),
                log::Level::Warn => AnsiColor::Yellow.on_default(),
                log::Level::Info => AnsiColor::Green.on_default(),
                log::Level::Debug => AnsiColor::Blue.on_default(),
                log::Level::Trace => AnsiColor::Cyan.on_default(),
            };
            write!(
                buf,
                "{level_style}{}{level_style:#} {}{}",
                record.level(),
                account_prefix(record),
                record.target(),
            )?;
            write!(buf, "{subtle}]{subtle:#} ")?;
            writeln!(buf, "{}", record.args())
        });
    }
    builder.init();
}
