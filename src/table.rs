//! 기본 단위 쌍 사이의 정방향 변환 계수 테이블.
//!
//! 테이블은 평평하다. 나열된 쌍(또는 그 역방향)만 변환할 수 있고, 중간 단위를 거치는
//! 경로 탐색은 하지 않는다. 여러 단계를 거치는 변환이 필요하면 독립된 간선으로 추가한다.

use crate::constants::{MU_0, MU_B};
use crate::units::BaseUnit;
use BaseUnit::*;

/// `from` 1 단위가 `to` 로 `factor` 배가 된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionEdge {
    pub from: BaseUnit,
    pub to: BaseUnit,
    pub factor: f64,
    /// 목록 출력용 계수 표기
    pub expression: &'static str,
}

const fn edge(from: BaseUnit, to: BaseUnit, factor: f64, expression: &'static str) -> ConversionEdge {
    ConversionEdge {
        from,
        to,
        factor,
        expression,
    }
}

pub static EDGES: [ConversionEdge; 18] = [
    edge(Tesla, Gauss, 1e4, "1e4"),
    edge(Tesla, Oersted, 1e4, "1e4"),
    edge(AmperePerMeter, Tesla, MU_0, "MU_0"),
    edge(AmperePerMeter, Gauss, 1e4 * MU_0, "1e4 * MU_0"),
    edge(Gauss, Oersted, 1.0, "1"),
    // A/m -> T -> Oe 와 같은 값
    edge(AmperePerMeter, Oersted, 1e4 * MU_0, "1e4 * MU_0"),
    edge(EmuPerCm3, Tesla, 1e3 * MU_0, "1e3 * MU_0"),
    edge(ErgPerOeCm3, AmperePerMeter, 1e3, "1e3"),
    edge(EmuPerGram, Am2PerKg, 1.0, "1"),
    edge(JoulePerM3, GaussOersted, 1e8 * MU_0, "1e8 * MU_0"),
    edge(JoulePerM3, ErgPerCm3, 1e1, "1e1"),
    // (J/m^3 -> GOe) / (J/m^3 -> erg/cm^3)
    edge(ErgPerCm3, GaussOersted, 1e7 * MU_0, "1e7 * MU_0"),
    edge(Am2, Emu, 1e3, "1e3"),
    edge(Am2, ErgPerGauss, 1e3, "1e3"),
    edge(Am2, ErgPerOersted, 1e3, "1e3"),
    edge(Emu, ErgPerGauss, 1.0, "1"),
    edge(BohrMagneton, Am2, MU_B, "MU_B"),
    edge(BohrMagneton, Emu, 1e3 * MU_B, "1e3 * MU_B"),
];

/// 간선을 찾은 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// 테이블 조회 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeMatch {
    pub edge: &'static ConversionEdge,
    pub direction: Direction,
}

impl EdgeMatch {
    /// 방향을 반영한 계수. 역방향이면 역수를 취한다.
    pub fn factor(&self) -> f64 {
        match self.direction {
            Direction::Forward => self.edge.factor,
            Direction::Reverse => 1.0 / self.edge.factor,
        }
    }
}

/// 정방향 간선을 먼저 찾고, 없으면 역방향 간선을 찾는다.
pub fn lookup(from: BaseUnit, to: BaseUnit) -> Option<EdgeMatch> {
    if let Some(edge) = EDGES.iter().find(|e| e.from == from && e.to == to) {
        return Some(EdgeMatch {
            edge,
            direction: Direction::Forward,
        });
    }
    EDGES
        .iter()
        .find(|e| e.from == to && e.to == from)
        .map(|edge| EdgeMatch {
            edge,
            direction: Direction::Reverse,
        })
}

/// muB/fu <-> T 는 테이블 대신 격자 정보로 계산하는 특수 경로다.
pub fn is_lattice_pair(a: BaseUnit, b: BaseUnit) -> bool {
    matches!(
        (a, b),
        (BohrMagnetonPerFu, Tesla) | (Tesla, BohrMagnetonPerFu)
    )
}
