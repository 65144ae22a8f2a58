use std::{env, fs, io::Write, path::PathBuf};

use chrono::Utc;
use env_logger::Builder;
use log::LevelFilter;

use crate::HOME;

pub fn init_logger(debug: bool) {
    let mut builder = Builder::new();

    builder.format(|formatter, record| {
        writeln!(
            formatter,
            "{} [{}] ({}): {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S %z"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else if debug {
        builder.filter(None, LevelFilter::Debug);
    } else {
        builder.filter(None, LevelFilter::Info);
    }

    builder.init();
}

/// # Errors
///
/// If the data folder can't be created.
pub fn create_data_folder() -> anyhow::Result<()> {
    if let Some(folder) = data_folder() {
        fs::create_dir_all(folder)?;
    }

    Ok(())
}

#[must_use]
pub fn data_folder() -> Option<PathBuf> {
    dirs::data_dir().map(|folder| folder.join(HOME))
}

/// Falls back to the working directory when the platform has no data
/// directory.
#[must_use]
pub fn data_file(name: &str) -> PathBuf {
    data_folder().map_or_else(|| PathBuf::from(name), |folder| folder.join(name))
}
