/// 기본 단위가 나타내는 물리량 종류. 단위 목록을 묶어서 보여줄 때 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    FluxDensity,
    FieldStrength,
    Magnetization,
    MassMagnetization,
    EnergyDensity,
    MagneticMoment,
    MomentPerFormulaUnit,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 7] = [
        QuantityKind::FluxDensity,
        QuantityKind::FieldStrength,
        QuantityKind::Magnetization,
        QuantityKind::MassMagnetization,
        QuantityKind::EnergyDensity,
        QuantityKind::MagneticMoment,
        QuantityKind::MomentPerFormulaUnit,
    ];
}
