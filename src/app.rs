use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use log::warn;
use ndarray::Array1;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::i18n::{self, Translator};
use crate::lattice::LatticeParams;
use crate::ui_cli::{self, Session};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 로드 오류
    Config(ConfigError),
    /// 단위 변환 오류
    Conversion(ConversionError),
    /// 사용자 입력을 해석할 수 없음
    Input(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Conversion(e) => write!(f, "{e}"),
            AppError::Input(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 표준 입출력으로 대화형 세션을 실행한다.
pub fn run_interactive(config: &Config, tr: &Translator) -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), tr, config.display);
    session.run()
}

/// 격자 옵션 세 개가 모두 주어졌을 때만 `LatticeParams` 를 만든다.
pub fn lattice_from_args(
    abc: Option<&[f64]>,
    gamma: Option<f64>,
    formula_units: Option<u32>,
) -> Result<Option<LatticeParams>, AppError> {
    match (abc, gamma, formula_units) {
        (None, None, None) => Ok(None),
        (Some(&[a, b, c]), Some(gamma), Some(fu)) => Ok(Some(LatticeParams::new(a, b, c, gamma, fu))),
        (Some(abc), Some(_), Some(_)) => Err(ConversionError::InvalidLatticeInput(format!(
            "expected 3 lattice parameters, got {}",
            abc.len()
        ))
        .into()),
        _ => Err(ConversionError::InvalidLatticeInput(
            "--abc, --gamma and --fu must be given together".to_string(),
        )
        .into()),
    }
}

/// 값 하나를 변환해 결과 한 줄을 출력한다.
pub fn run_convert(
    config: &Config,
    value: f64,
    from: &str,
    to: &str,
    lattice: Option<&LatticeParams>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let report = conversion::convert_unit_verbose(value, from, to, lattice).map_err(|e| {
        warn!("변환 실패: {value} {from} -> {to}: {e}");
        e
    })?;
    writeln!(out, "{}", report.render(&config.display))?;
    Ok(())
}

/// 공백으로 구분된 숫자들을 읽어 배열 경로로 한 번에 변환한다.
pub fn run_batch(
    config: &Config,
    from: &str,
    to: &str,
    input: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let values = input
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| AppError::Input(format!("not a number: {tok:?}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let converted = conversion::convert_array(&Array1::from(values), from, to)?;
    for v in converted.iter() {
        writeln!(out, "{}", config.display.format_value(*v))?;
    }
    Ok(())
}

/// 배치 입력을 파일 또는 표준 입력에서 읽는다.
pub fn read_batch_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub fn run_units(tr: &Translator, out: &mut impl Write) -> Result<(), AppError> {
    ui_cli::write_units(out, tr)
}

pub fn run_conversions(tr: &Translator, out: &mut impl Write) -> Result<(), AppError> {
    ui_cli::write_conversions(out, tr)
}

/// 실제로 적용되는 설정을 TOML 로 출력한다.
pub fn run_show_config(config: &Config, out: &mut impl Write) -> Result<(), AppError> {
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

/// 오류를 번역된 접두어와 함께 표준 오류로 출력한다.
pub fn report_error(tr: &Translator, err: &AppError) {
    eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
}
