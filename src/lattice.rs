//! muB/fu <-> T 변환.
//!
//! 식 단위당 보어 마그네톤 수는 단위 셀 부피를 알아야 자화(A/m)로 바꿀 수 있으므로,
//! 호출마다 격자 상수를 받아 셀 부피를 구한 뒤 계산한다.

use serde::{Deserialize, Serialize};

use crate::constants::{ANGSTROM_M, MU_0, MU_B};
use crate::conversion::ConversionError;

const GAMMA_TOLERANCE_DEG: f64 = 1e-9;

/// 지원하는 셀 형태. 직교(γ=90°)와 육방(γ=120°)만 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellGeometry {
    Orthogonal,
    Hexagonal,
}

impl CellGeometry {
    pub fn from_gamma(gamma_deg: f64) -> Result<Self, ConversionError> {
        if (gamma_deg - 90.0).abs() < GAMMA_TOLERANCE_DEG {
            Ok(CellGeometry::Orthogonal)
        } else if (gamma_deg - 120.0).abs() < GAMMA_TOLERANCE_DEG {
            Ok(CellGeometry::Hexagonal)
        } else {
            Err(ConversionError::UnsupportedGeometry(gamma_deg))
        }
    }
}

/// 격자 상수 입력. a, b, c 는 Å 단위, gamma 는 도(deg) 단위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub gamma: f64,
    pub formula_units_per_cell: u32,
}

impl LatticeParams {
    pub fn new(a: f64, b: f64, c: f64, gamma: f64, formula_units_per_cell: u32) -> Self {
        Self {
            a,
            b,
            c,
            gamma,
            formula_units_per_cell,
        }
    }

    /// 길이와 식 단위 수를 먼저 검사한 뒤 셀 형태를 결정한다.
    pub fn validate(&self) -> Result<CellGeometry, ConversionError> {
        for (name, v) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConversionError::InvalidLatticeInput(format!(
                    "lattice parameter {name} must be a positive number, got {v}"
                )));
            }
        }
        if self.formula_units_per_cell == 0 {
            return Err(ConversionError::InvalidLatticeInput(
                "formula units per cell must be at least 1".to_string(),
            ));
        }
        CellGeometry::from_gamma(self.gamma)
    }

    /// 단위 셀 부피 [m³].
    pub fn cell_volume_m3(&self) -> Result<f64, ConversionError> {
        let geometry = self.validate()?;
        let (a, b, c) = (self.a * ANGSTROM_M, self.b * ANGSTROM_M, self.c * ANGSTROM_M);
        let volume = match geometry {
            CellGeometry::Orthogonal => a * b * c,
            CellGeometry::Hexagonal => a * b * c * 120f64.to_radians().sin(),
        };
        Ok(volume)
    }
}

/// muB/fu -> T. 셀당 총 모멘트를 부피로 나눠 자화를 구하고 MU_0 를 곱한다.
pub fn mub_per_fu_to_tesla(mub_per_fu: f64, lattice: &LatticeParams) -> Result<f64, ConversionError> {
    let volume = lattice.cell_volume_m3()?;
    let moment = mub_per_fu * f64::from(lattice.formula_units_per_cell) * MU_B;
    let magnetization = moment / volume;
    Ok(magnetization * MU_0)
}

/// T -> muB/fu. `mub_per_fu_to_tesla` 의 역연산.
pub fn tesla_to_mub_per_fu(tesla: f64, lattice: &LatticeParams) -> Result<f64, ConversionError> {
    let volume = lattice.cell_volume_m3()?;
    let magnetization = tesla / MU_0;
    let moment = magnetization * volume;
    Ok(moment / (f64::from(lattice.formula_units_per_cell) * MU_B))
}
