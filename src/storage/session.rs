//! Session 凭证持久化
//!
//! 登录态以 cookie 同名条目 `jwt-token` 存放在 ~/.taskdeck/session.toml，
//! 由外部登录流程写入。本模块只读，从不刷新或清除该值。

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::taskdeck_dir;

/// session 文件内容
#[derive(Debug, Deserialize)]
struct SessionFile {
    /// bearer token，与服务端下发的 cookie 同名
    #[serde(rename = "jwt-token", default)]
    jwt_token: Option<String>,
}

/// 获取 session 文件路径
fn session_path() -> PathBuf {
    taskdeck_dir().join("session.toml")
}

/// 读取 session token（缺文件、缺字段、空白值均视为未登录）
pub fn load_token() -> Option<String> {
    load_token_from(&session_path())
}

/// 从指定路径读取 session token
pub fn load_token_from(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let file: SessionFile = toml::from_str(&content).ok()?;
    let token = file.jwt_token?;
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_means_no_token() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_token_from(&dir.path().join("session.toml")), None);
    }

    #[test]
    fn test_load_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(&path, "\"jwt-token\" = \"abc123\"\n").unwrap();

        assert_eq!(load_token_from(&path).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_blank_token_means_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(&path, "\"jwt-token\" = \"   \"\n").unwrap();

        assert_eq!(load_token_from(&path), None);
    }

    #[test]
    fn test_missing_key_means_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(&path, "other = \"value\"\n").unwrap();

        assert_eq!(load_token_from(&path), None);
    }

    #[test]
    fn test_token_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(&path, "\"jwt-token\" = \" abc123 \"\n").unwrap();

        assert_eq!(load_token_from(&path).as_deref(), Some("abc123"));
    }
}
