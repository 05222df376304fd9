use sys_locale::get_locale;

use crate::quantity::QuantityKind;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const BANNER: &str = "session.banner";
    pub const HELP_INPUT: &str = "session.help_input";
    pub const HELP_UNITS: &str = "session.help_units";
    pub const HELP_CONV: &str = "session.help_conv";
    pub const HELP_QUIT: &str = "session.help_quit";
    pub const PROMPT_INPUT: &str = "prompt.input";
    pub const ERROR_INPUT_FORMAT: &str = "error.input_format";

    pub const UNITS_HEADING: &str = "units.heading";
    pub const UNITS_PREFIXES: &str = "units.prefixes";
    pub const UNITS_NO_PREFIX: &str = "units.no_prefix";

    pub const CONV_HEADING: &str = "conv.heading";
    pub const CONV_LATTICE: &str = "conv.lattice";
    pub const CONV_INFO_FORWARD: &str = "conv.info_forward";
    pub const CONV_INFO_MU0: &str = "conv.info_mu0";
    pub const CONV_INFO_MUB: &str = "conv.info_mub";

    pub const LATTICE_HEADING: &str = "lattice.heading";
    pub const LATTICE_ABC_NOTE: &str = "lattice.abc_note";
    pub const PROMPT_ABC: &str = "prompt.abc";
    pub const LATTICE_GEOMETRY_NOTE: &str = "lattice.geometry_note";
    pub const PROMPT_GAMMA: &str = "prompt.gamma";
    pub const LATTICE_FU_NOTE: &str = "lattice.fu_note";
    pub const PROMPT_FU: &str = "prompt.fu";

    pub const QUANTITY_FLUX_DENSITY: &str = "quantity.flux_density";
    pub const QUANTITY_FIELD_STRENGTH: &str = "quantity.field_strength";
    pub const QUANTITY_MAGNETIZATION: &str = "quantity.magnetization";
    pub const QUANTITY_MASS_MAGNETIZATION: &str = "quantity.mass_magnetization";
    pub const QUANTITY_ENERGY_DENSITY: &str = "quantity.energy_density";
    pub const QUANTITY_MOMENT: &str = "quantity.moment";
    pub const QUANTITY_MOMENT_PER_FU: &str = "quantity.moment_per_fu";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }

    pub fn quantity(&self, kind: QuantityKind) -> &'static str {
        use keys::*;
        self.t(match kind {
            QuantityKind::FluxDensity => QUANTITY_FLUX_DENSITY,
            QuantityKind::FieldStrength => QUANTITY_FIELD_STRENGTH,
            QuantityKind::Magnetization => QUANTITY_MAGNETIZATION,
            QuantityKind::MassMagnetization => QUANTITY_MASS_MAGNETIZATION,
            QuantityKind::EnergyDensity => QUANTITY_ENERGY_DENSITY,
            QuantityKind::MagneticMoment => QUANTITY_MOMENT,
            QuantityKind::MomentPerFormulaUnit => QUANTITY_MOMENT_PER_FU,
        })
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        BANNER => "*****자성 단위 변환*****",
        HELP_INPUT => "'Input:' 프롬프트에서 입력:\n[값 시작단위 목표단위] 예: 6 T A/m,",
        HELP_UNITS => "[units] 사용 가능한 단위 목록,",
        HELP_CONV => "[conv] 변환 계수 목록,",
        HELP_QUIT => "[q] 종료.",
        ERROR_INPUT_FORMAT => "입력 형식: <값> <시작단위> <목표단위>",
        UNITS_HEADING => "\n변환 가능한 기본 단위:",
        UNITS_PREFIXES => "\n기본 단위에 붙일 수 있는 접두어:",
        UNITS_NO_PREFIX => "(muB/fu 에는 접두어를 붙일 수 없습니다)",
        CONV_HEADING => "\n기본 단위 사이의 변환:",
        CONV_LATTICE => "격자 상수 입력 필요",
        CONV_INFO_FORWARD => "\n참고: 위 계수는 정방향 변환 기준입니다",
        CONV_INFO_MU0 => "참고: 진공 투자율, MU_0 = 4 * pi * 1e-7 H/m (== Vs/Am)",
        CONV_INFO_MUB => "참고: 보어 마그네톤, MU_B = 9.274015e-24 Am^2 (단위 문자열은 muB)",
        LATTICE_HEADING => "\n***참고: 식 단위당 muB <-> T***\n",
        LATTICE_ABC_NOTE => "격자 상수 a b c 를 Å 단위로 입력하세요",
        LATTICE_GEOMETRY_NOTE => "\n직교 또는 육방 단위 셀만 지원합니다:",
        PROMPT_GAMMA => "gamma 를 도 단위로 입력 (90 또는 120): ",
        LATTICE_FU_NOTE => "단위 셀당 식 단위 수를 입력하세요:",
        QUANTITY_FLUX_DENSITY => "자속 밀도",
        QUANTITY_FIELD_STRENGTH => "자기장 세기",
        QUANTITY_MAGNETIZATION => "자화",
        QUANTITY_MASS_MAGNETIZATION => "질량 자화",
        QUANTITY_ENERGY_DENSITY => "에너지 밀도",
        QUANTITY_MOMENT => "자기 모멘트",
        QUANTITY_MOMENT_PER_FU => "식 단위당 모멘트",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        BANNER => "*****Conversion between magnetic units.*****",
        HELP_INPUT => "\nAt the 'Input:' prompt, enter:\n[value startunit endunit] e.g. 6 T A/m,",
        HELP_UNITS => "[units] to list the available units,",
        HELP_CONV => "[conv] to list the conversion factors or",
        HELP_QUIT => "[q] to quit.",
        PROMPT_INPUT => "\nInput: ",
        ERROR_INPUT_FORMAT => "expected: <value> <startunit> <endunit>",
        UNITS_HEADING => "\nThe base units available for conversion are:",
        UNITS_PREFIXES => "\nThe prefactors available for the base units are:",
        UNITS_NO_PREFIX => "(muB/fu does not take a prefactor)",
        CONV_HEADING => "\nThe conversions between base units available are:",
        CONV_LATTICE => "requires lattice parameters",
        CONV_INFO_FORWARD => "\nINFO: the factors given above are for the forward conversion",
        CONV_INFO_MU0 => "INFO: permeability of free space, MU_0 = 4 * pi * 1e-7 H/m (== Vs/Am)",
        CONV_INFO_MUB => "INFO: Bohr magneton, MU_B = 9.274015e-24 Am^2 (unit string: muB)",
        LATTICE_HEADING => "\n***INFO: muB per formula unit <-> T***\n",
        LATTICE_ABC_NOTE => "Please enter lattice parameters: a b c in Angstrom",
        PROMPT_ABC => "a b c: ",
        LATTICE_GEOMETRY_NOTE => "\nLimited to orthogonal or hexagonal unit cells:",
        PROMPT_GAMMA => "Please enter gamma in deg. (90 or 120): ",
        LATTICE_FU_NOTE => "Please enter the number of formula units per unit cell:",
        PROMPT_FU => "f.u./unit cell: ",
        QUANTITY_FLUX_DENSITY => "flux density",
        QUANTITY_FIELD_STRENGTH => "field strength",
        QUANTITY_MAGNETIZATION => "magnetization",
        QUANTITY_MASS_MAGNETIZATION => "mass magnetization",
        QUANTITY_ENERGY_DENSITY => "energy density",
        QUANTITY_MOMENT => "magnetic moment",
        QUANTITY_MOMENT_PER_FU => "moment per formula unit",
        _ => "[missing translation]",
    }
}
