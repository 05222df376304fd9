use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::format::DisplayOptions;

/// 경로를 지정하지 않았을 때 찾는 설정 파일.
pub const DEFAULT_CONFIG_FILE: &str = "magnet_units.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto, ko, en
    pub language: String,
    pub display: DisplayOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            display: DisplayOptions::default(),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 지정한 경로(없으면 magnet_units.toml)에서 설정을 읽는다.
///
/// 경로를 명시했는데 파일이 없으면 오류, 기본 경로에 파일이 없으면 기본 설정을 쓴다.
/// 파일을 새로 만들지는 않는다.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => from_file(p),
        None => {
            let p = Path::new(DEFAULT_CONFIG_FILE);
            if p.exists() {
                from_file(p)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn from_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Config::from_toml(&content)
}

impl Config {
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
