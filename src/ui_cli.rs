use std::io::{BufRead, Write};

use log::warn;

use crate::app::AppError;
use crate::conversion::{self, ConversionError};
use crate::format::DisplayOptions;
use crate::i18n::{keys, Translator};
use crate::lattice::LatticeParams;
use crate::parser::parse_unit;
use crate::quantity::QuantityKind;
use crate::table::{self, EDGES};
use crate::units::{BaseUnit, Prefix};

/// `Input:` 한 줄을 해석한 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Units,
    Conversions,
    Convert { value: f64, from: String, to: String },
}

/// `<값> <시작단위> <목표단위>` 또는 키워드를 해석한다.
pub fn parse_command(line: &str) -> Result<Command, AppError> {
    let line = line.trim();
    match line {
        "q" => return Ok(Command::Quit),
        "units" => return Ok(Command::Units),
        "conv" => return Ok(Command::Conversions),
        _ => {}
    }
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [value, from, to] = parts[..] else {
        return Err(AppError::Input(format!("got {line:?}")));
    };
    let value = value
        .parse::<f64>()
        .map_err(|_| AppError::Input(format!("not a number: {value:?}")))?;
    Ok(Command::Convert {
        value,
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// 대화형 변환 세션. 입출력을 주입받으므로 테스트에서 메모리 버퍼로 구동할 수 있다.
pub struct Session<'a, R, W> {
    input: R,
    out: W,
    tr: &'a Translator,
    display: DisplayOptions,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, out: W, tr: &'a Translator, display: DisplayOptions) -> Self {
        Self {
            input,
            out,
            tr,
            display,
        }
    }

    /// `q` 또는 입력 끝(EOF)까지 반복한다. 변환/입력 오류는 출력 후 계속 진행한다.
    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "magnet_units {}\n", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.out, "{}", self.tr.t(keys::BANNER))?;
        for key in [keys::HELP_INPUT, keys::HELP_UNITS, keys::HELP_CONV, keys::HELP_QUIT] {
            writeln!(self.out, "{}", self.tr.t(key))?;
        }
        loop {
            let Some(line) = self.read_line(self.tr.t(keys::PROMPT_INPUT))? else {
                break;
            };
            match self.handle_line(&line) {
                Ok(true) => {}
                Ok(false) => break,
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => {
                    warn!("입력 처리 실패: {line:?}: {e}");
                    self.print_error(&e)?;
                }
            }
        }
        writeln!(self.out, "{}", self.tr.t(keys::APP_EXIT))?;
        Ok(())
    }

    /// 한 줄을 처리한다. 세션을 끝내야 하면 false.
    fn handle_line(&mut self, line: &str) -> Result<bool, AppError> {
        if line.trim().is_empty() {
            return Ok(true);
        }
        let command = parse_command(line).map_err(|e| match e {
            AppError::Input(detail) => {
                AppError::Input(format!("{} ({detail})", self.tr.t(keys::ERROR_INPUT_FORMAT)))
            }
            other => other,
        })?;
        match command {
            Command::Quit => return Ok(false),
            Command::Units => write_units(&mut self.out, self.tr)?,
            Command::Conversions => write_conversions(&mut self.out, self.tr)?,
            Command::Convert { value, from, to } => self.convert(value, &from, &to)?,
        }
        Ok(true)
    }

    fn convert(&mut self, value: f64, from: &str, to: &str) -> Result<(), AppError> {
        let f = parse_unit(from)?;
        let t = parse_unit(to)?;
        let lattice = if table::is_lattice_pair(f.base, t.base) {
            match self.prompt_lattice()? {
                Some(params) => Some(params),
                None => return Ok(()),
            }
        } else {
            None
        };
        let report = conversion::convert_unit_verbose(value, from, to, lattice.as_ref())?;
        writeln!(self.out, "\n{}", report.render(&self.display))?;
        Ok(())
    }

    /// a b c, gamma, 식 단위 수를 차례로 묻는다. 도중에 EOF 면 None.
    fn prompt_lattice(&mut self) -> Result<Option<LatticeParams>, AppError> {
        writeln!(self.out, "{}", self.tr.t(keys::LATTICE_HEADING))?;
        writeln!(self.out, "{}", self.tr.t(keys::LATTICE_ABC_NOTE))?;
        let Some(abc) = self.read_line(self.tr.t(keys::PROMPT_ABC))? else {
            return Ok(None);
        };
        let lengths = abc
            .split_whitespace()
            .map(|s| s.parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid_lattice(format!("a b c must be numbers, got {:?}", abc.trim())))?;
        let [a, b, c] = lengths[..] else {
            return Err(invalid_lattice(format!(
                "expected 3 lattice parameters, got {}",
                lengths.len()
            )));
        };

        writeln!(self.out, "{}", self.tr.t(keys::LATTICE_GEOMETRY_NOTE))?;
        let Some(gamma) = self.read_line(self.tr.t(keys::PROMPT_GAMMA))? else {
            return Ok(None);
        };
        let gamma = gamma
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid_lattice(format!("gamma must be a number, got {:?}", gamma.trim())))?;

        writeln!(self.out, "{}", self.tr.t(keys::LATTICE_FU_NOTE))?;
        let Some(fu) = self.read_line(self.tr.t(keys::PROMPT_FU))? else {
            return Ok(None);
        };
        let fu = fu.trim().parse::<u32>().map_err(|_| {
            invalid_lattice(format!(
                "formula units per cell must be a positive integer, got {:?}",
                fu.trim()
            ))
        })?;

        Ok(Some(LatticeParams::new(a, b, c, gamma, fu)))
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print_error(&mut self, err: &AppError) -> Result<(), AppError> {
        writeln!(self.out, "\n{}: {err}", self.tr.t(keys::ERROR_PREFIX))?;
        Ok(())
    }
}

fn invalid_lattice(msg: String) -> AppError {
    AppError::Conversion(ConversionError::InvalidLatticeInput(msg))
}

/// 물리량별로 묶은 기본 단위와 접두어 목록을 출력한다.
pub fn write_units(out: &mut impl Write, tr: &Translator) -> Result<(), AppError> {
    writeln!(out, "{}", tr.t(keys::UNITS_HEADING))?;
    for kind in QuantityKind::ALL {
        let symbols: Vec<&str> = BaseUnit::ALL
            .into_iter()
            .filter(|u| u.quantity() == kind)
            .map(BaseUnit::symbol)
            .collect();
        writeln!(out, "  {}: {}", tr.quantity(kind), symbols.join(", "))?;
    }
    let prefixes: Vec<String> = Prefix::ALL
        .into_iter()
        .map(|p| format!("{} ({:e})", p.symbol(), p.factor()))
        .collect();
    writeln!(out, "{} {}", tr.t(keys::UNITS_PREFIXES), prefixes.join(", "))?;
    writeln!(out, "{}", tr.t(keys::UNITS_NO_PREFIX))?;
    Ok(())
}

/// 테이블의 모든 간선과 정방향 계수를 출력한다.
pub fn write_conversions(out: &mut impl Write, tr: &Translator) -> Result<(), AppError> {
    let width = BaseUnit::ALL
        .into_iter()
        .map(|u| u.symbol().len())
        .max()
        .unwrap_or(0);
    writeln!(out, "{}", tr.t(keys::CONV_HEADING))?;
    for edge in EDGES.iter() {
        writeln!(
            out,
            "{:>width$}  <->  {:<width$}:    {}",
            edge.from.symbol(),
            edge.to.symbol(),
            edge.expression
        )?;
    }
    writeln!(
        out,
        "{:>width$}  <->  {:<width$}:    {}",
        BaseUnit::BohrMagnetonPerFu.symbol(),
        BaseUnit::Tesla.symbol(),
        tr.t(keys::CONV_LATTICE)
    )?;
    writeln!(out, "{}", tr.t(keys::CONV_INFO_FORWARD))?;
    writeln!(out, "{}", tr.t(keys::CONV_INFO_MU0))?;
    writeln!(out, "{}", tr.t(keys::CONV_INFO_MUB))?;
    Ok(())
}
