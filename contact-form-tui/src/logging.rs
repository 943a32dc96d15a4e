use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::AppError;
use crate::paths;

/// Install a file logger at `<cache dir>/latest.log`, archiving the previous
/// run's log first. Returns the path being written.
pub fn init(level: LevelFilter) -> Result<PathBuf, AppError> {
    let dir = paths::cache_dir().ok_or(AppError::NoCacheDir)?;
    fs::create_dir_all(&dir)?;
    paths::rotate_logs(&dir);

    let path = paths::latest_log(&dir);
    let file = File::create(&path)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file)?;

    Ok(path)
}
