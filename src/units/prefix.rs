/// 단위 문자열 앞에 붙는 SI 접두어. 단위당 최대 하나만 허용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    None,
    Mega,
    Kilo,
    Milli,
    Micro,
}

impl Prefix {
    /// 접두어로 인식하는 문자 목록 (표시용).
    pub const ALL: [Prefix; 4] = [Prefix::Mega, Prefix::Kilo, Prefix::Milli, Prefix::Micro];

    /// 선행 문자를 접두어로 해석한다. 마이크로는 U+00B5, U+03BC 둘 다 받는다.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(Prefix::Mega),
            'k' => Some(Prefix::Kilo),
            'm' => Some(Prefix::Milli),
            '\u{b5}' | '\u{3bc}' => Some(Prefix::Micro),
            _ => None,
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            Prefix::None => 1.0,
            Prefix::Mega => 1e6,
            Prefix::Kilo => 1e3,
            Prefix::Milli => 1e-3,
            Prefix::Micro => 1e-6,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Prefix::None => "",
            Prefix::Mega => "M",
            Prefix::Kilo => "k",
            Prefix::Milli => "m",
            Prefix::Micro => "\u{b5}",
        }
    }
}
