pub mod config;
pub mod session;

use std::path::PathBuf;

/// 获取 ~/.taskdeck/ 目录路径
pub fn taskdeck_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".taskdeck")
}
