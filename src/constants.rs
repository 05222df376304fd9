//! 변환 테이블에 들어가는 물리 상수.

/// 진공 투자율 [H/m] (= Vs/Am).
pub const MU_0: f64 = 4.0 * std::f64::consts::PI * 1e-7;

/// 보어 마그네톤 [A·m²]. Coey, Magnetism and Magnetic Materials 상수표 기준.
pub const MU_B: f64 = 9.274015e-24;

/// Å → m 환산 계수.
pub const ANGSTROM_M: f64 = 1e-10;
