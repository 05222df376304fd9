use log::debug;

use crate::conversion::ConversionError;
use crate::units::{BaseUnit, Prefix};

/// 접두어와 기본 단위로 분리된 단위 문자열.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedUnit {
    pub prefix: Prefix,
    pub base: BaseUnit,
}

impl ParsedUnit {
    pub fn factor(&self) -> f64 {
        self.prefix.factor()
    }
}

impl std::fmt::Display for ParsedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.prefix.symbol(), self.base.symbol())
    }
}

/// 단위 문자열을 (접두어, 기본 단위)로 해석한다.
///
/// 전체 문자열이 기본 단위 표기와 정확히 일치하면 그것을 우선한다. 그래서 `muB` 는
/// 밀리 접두어 + `uB` 로 읽히지 않는다. 그렇지 않으면 첫 글자를 접두어로 떼어 내고
/// 나머지를 다시 맞춰 본다.
pub fn parse_unit(s: &str) -> Result<ParsedUnit, ConversionError> {
    let trimmed = s.trim();
    if let Some(base) = BaseUnit::from_symbol(trimmed) {
        return Ok(ParsedUnit {
            prefix: Prefix::None,
            base,
        });
    }

    let mut chars = trimmed.chars();
    let parsed = chars.next().and_then(|first| {
        let prefix = Prefix::from_char(first)?;
        let base = BaseUnit::from_symbol(chars.as_str())?;
        base.accepts_prefix().then_some(ParsedUnit { prefix, base })
    });

    match parsed {
        Some(unit) => {
            debug!("단위 해석: {s:?} -> {:?} {:?}", unit.prefix, unit.base);
            Ok(unit)
        }
        None => Err(ConversionError::UnrecognizedUnit(s.to_string())),
    }
}
