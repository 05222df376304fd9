use log::{debug, trace};
use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::format::DisplayOptions;
use crate::lattice::{self, LatticeParams};
use crate::parser::{parse_unit, ParsedUnit};
use crate::table;
use crate::units::BaseUnit;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 접두어를 떼어 내도 기본 단위와 맞지 않는 문자열
    UnrecognizedUnit(String),
    /// 두 단위 모두 유효하지만 테이블에 연결 간선이 없음
    UnsupportedConversion { from: String, to: String },
    /// γ 가 90°/120° 가 아님
    UnsupportedGeometry(f64),
    /// 격자 상수 누락 또는 범위 밖
    InvalidLatticeInput(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnrecognizedUnit(u) => write!(f, "unit not recognised: {u:?}"),
            ConversionError::UnsupportedConversion { from, to } => {
                write!(f, "conversion not available: {from} to {to}")
            }
            ConversionError::UnsupportedGeometry(g) => write!(
                f,
                "unsupported cell geometry: gamma = {g} deg (only 90 or 120 are handled)"
            ),
            ConversionError::InvalidLatticeInput(msg) => write!(f, "invalid lattice input: {msg}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 격자 경로로 계산한 경우의 부가 정보.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeDetails {
    pub formula_units_per_cell: u32,
    pub cell_volume_m3: f64,
}

/// 설명 문구를 포함한 변환 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub input: f64,
    pub from: ParsedUnit,
    pub to: ParsedUnit,
    pub value: f64,
    /// 곱해진 전체 계수. 격자 경로는 선형 계수 하나로 표현하지 않으므로 None.
    pub factor: Option<f64>,
    pub lattice: Option<LatticeDetails>,
}

impl ConversionReport {
    /// 출력 형식을 지정해 한 줄 설명을 만든다.
    pub fn render(&self, opts: &DisplayOptions) -> String {
        let mut line = format!(
            "{} {} = {} {}",
            self.input,
            self.from,
            opts.format_value(self.value),
            self.to
        );
        if let Some(details) = self.lattice {
            line.push_str(&format!(
                " ({} f.u./unit cell, cell volume = {} m^3)",
                details.formula_units_per_cell,
                opts.format_volume(details.cell_volume_m3)
            ));
        } else if let Some(factor) = self.factor {
            line.push_str(&format!(" (factor {factor:e})"));
        }
        line
    }
}

impl std::fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&DisplayOptions::default()))
    }
}

enum Route {
    Factor(f64),
    Lattice,
}

fn resolve(from: &ParsedUnit, to: &ParsedUnit, from_str: &str, to_str: &str) -> Result<Route, ConversionError> {
    if from.base == to.base {
        return Ok(Route::Factor(from.factor() / to.factor()));
    }
    if table::is_lattice_pair(from.base, to.base) {
        return Ok(Route::Lattice);
    }
    match table::lookup(from.base, to.base) {
        Some(found) => {
            debug!(
                "간선 {} -> {} ({:?}), 계수 {}",
                found.edge.from,
                found.edge.to,
                found.direction,
                found.edge.expression
            );
            Ok(Route::Factor(from.factor() * found.factor() / to.factor()))
        }
        None => Err(ConversionError::UnsupportedConversion {
            from: from_str.to_string(),
            to: to_str.to_string(),
        }),
    }
}

/// `from` 단위 1 이 `to` 단위로 몇이 되는지 반환한다. 접두어가 모두 반영된다.
///
/// muB/fu <-> T 는 격자 정보가 필요하므로 단일 계수가 없고 `UnsupportedConversion` 이다.
pub fn conversion_factor(from: &str, to: &str) -> Result<f64, ConversionError> {
    let f = parse_unit(from)?;
    let t = parse_unit(to)?;
    match resolve(&f, &t, from, to)? {
        Route::Factor(factor) => Ok(factor),
        Route::Lattice => Err(ConversionError::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        }),
    }
}

/// 값 하나를 변환한다. `lattice` 는 muB/fu <-> T 에서만 사용된다.
pub fn convert_unit(
    value: f64,
    from: &str,
    to: &str,
    lattice: Option<&LatticeParams>,
) -> Result<f64, ConversionError> {
    convert_unit_verbose(value, from, to, lattice).map(|r| r.value)
}

/// `convert_unit` 과 같지만 설명 문구를 만들 수 있는 보고서를 반환한다.
pub fn convert_unit_verbose(
    value: f64,
    from: &str,
    to: &str,
    lattice: Option<&LatticeParams>,
) -> Result<ConversionReport, ConversionError> {
    let f = parse_unit(from)?;
    let t = parse_unit(to)?;
    let report = match resolve(&f, &t, from, to)? {
        Route::Factor(factor) => ConversionReport {
            input: value,
            from: f,
            to: t,
            value: value * factor,
            factor: Some(factor),
            lattice: None,
        },
        Route::Lattice => {
            let params = lattice.ok_or_else(|| {
                ConversionError::InvalidLatticeInput(
                    "lattice parameters are required for muB/fu <-> T".to_string(),
                )
            })?;
            let converted = if f.base == BaseUnit::BohrMagnetonPerFu {
                lattice::mub_per_fu_to_tesla(value, params)? / t.factor()
            } else {
                lattice::tesla_to_mub_per_fu(value * f.factor(), params)?
            };
            ConversionReport {
                input: value,
                from: f,
                to: t,
                value: converted,
                factor: None,
                lattice: Some(LatticeDetails {
                    formula_units_per_cell: params.formula_units_per_cell,
                    cell_volume_m3: params.cell_volume_m3()?,
                }),
            }
        }
    };
    debug!("변환: {report}");
    Ok(report)
}

/// 배열 전체를 같은 계수로 변환한다. 모양(shape)은 그대로 유지된다.
pub fn convert_array<S, D>(
    values: &ArrayBase<S, D>,
    from: &str,
    to: &str,
) -> Result<Array<f64, D>, ConversionError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let factor = conversion_factor(from, to)?;
    trace!("배열 변환 {} 개: {from} -> {to}, 계수 {factor:e}", values.len());
    Ok(values.mapv(|v| v * factor))
}
