use crate::quantity::QuantityKind;

/// 변환 테이블이 다루는 기본 단위. 닫힌 집합이며 각 변형은 표기 문자열 하나를 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseUnit {
    Tesla,
    Gauss,
    Oersted,
    AmperePerMeter,
    EmuPerCm3,
    ErgPerOeCm3,
    EmuPerGram,
    Am2PerKg,
    JoulePerM3,
    GaussOersted,
    ErgPerCm3,
    Am2,
    Emu,
    ErgPerGauss,
    ErgPerOersted,
    BohrMagneton,
    BohrMagnetonPerFu,
}

impl BaseUnit {
    pub const ALL: [BaseUnit; 17] = [
        BaseUnit::Tesla,
        BaseUnit::Gauss,
        BaseUnit::Oersted,
        BaseUnit::AmperePerMeter,
        BaseUnit::EmuPerCm3,
        BaseUnit::ErgPerOeCm3,
        BaseUnit::EmuPerGram,
        BaseUnit::Am2PerKg,
        BaseUnit::JoulePerM3,
        BaseUnit::GaussOersted,
        BaseUnit::ErgPerCm3,
        BaseUnit::Am2,
        BaseUnit::Emu,
        BaseUnit::ErgPerGauss,
        BaseUnit::ErgPerOersted,
        BaseUnit::BohrMagneton,
        BaseUnit::BohrMagnetonPerFu,
    ];

    /// 물리 표기 그대로의 단위 문자열 (대소문자 구분).
    pub fn symbol(self) -> &'static str {
        match self {
            BaseUnit::Tesla => "T",
            BaseUnit::Gauss => "G",
            BaseUnit::Oersted => "Oe",
            BaseUnit::AmperePerMeter => "A/m",
            BaseUnit::EmuPerCm3 => "emu/cm^3",
            BaseUnit::ErgPerOeCm3 => "erg/Oecm^3",
            BaseUnit::EmuPerGram => "emu/g",
            BaseUnit::Am2PerKg => "Am^2/kg",
            BaseUnit::JoulePerM3 => "J/m^3",
            BaseUnit::GaussOersted => "GOe",
            BaseUnit::ErgPerCm3 => "erg/cm^3",
            BaseUnit::Am2 => "Am^2",
            BaseUnit::Emu => "emu",
            BaseUnit::ErgPerGauss => "erg/G",
            BaseUnit::ErgPerOersted => "erg/Oe",
            BaseUnit::BohrMagneton => "muB",
            BaseUnit::BohrMagnetonPerFu => "muB/fu",
        }
    }

    /// 표기 문자열과 정확히 일치하는 단위를 찾는다.
    pub fn from_symbol(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.symbol() == s)
    }

    /// muB/fu 는 격자 정보와 함께 한 번에 하나씩만 변환하므로 접두어를 받지 않는다.
    pub fn accepts_prefix(self) -> bool {
        !matches!(self, BaseUnit::BohrMagnetonPerFu)
    }

    pub fn quantity(self) -> QuantityKind {
        match self {
            BaseUnit::Tesla | BaseUnit::Gauss => QuantityKind::FluxDensity,
            BaseUnit::Oersted => QuantityKind::FieldStrength,
            BaseUnit::AmperePerMeter | BaseUnit::EmuPerCm3 | BaseUnit::ErgPerOeCm3 => {
                QuantityKind::Magnetization
            }
            BaseUnit::EmuPerGram | BaseUnit::Am2PerKg => QuantityKind::MassMagnetization,
            BaseUnit::JoulePerM3 | BaseUnit::GaussOersted | BaseUnit::ErgPerCm3 => {
                QuantityKind::EnergyDensity
            }
            BaseUnit::Am2
            | BaseUnit::Emu
            | BaseUnit::ErgPerGauss
            | BaseUnit::ErgPerOersted
            | BaseUnit::BohrMagneton => QuantityKind::MagneticMoment,
            BaseUnit::BohrMagnetonPerFu => QuantityKind::MomentPerFormulaUnit,
        }
    }
}

impl std::fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
