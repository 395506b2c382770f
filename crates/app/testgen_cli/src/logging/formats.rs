use std::io::Write;

use flexi_logger::{DeferredNow, style};
use log::Record;

/// `<level> <message>`, level colored.
pub fn cli_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    write!(
        w,
        "{} {}",
        style(level).paint(level.as_str().to_lowercase()),
        record.args()
    )
}

/// `<time> <level> [<module>] <message>`, for `--verbose`.
pub fn detailed_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    write!(
        w,
        "{} {} [{}] {}",
        now.format("%H:%M:%S%.3f"),
        style(level).paint(level.as_str()),
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}
