//! 자성 단위 변환 엔진. 변환 로직은 라이브러리에 두고 CLI는 그 위의 얇은 껍데기로 둔다.

pub mod app;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod format;
pub mod i18n;
pub mod lattice;
pub mod parser;
pub mod quantity;
pub mod table;
pub mod ui_cli;
pub mod units;

pub use conversion::{
    conversion_factor, convert_array, convert_unit, convert_unit_verbose, ConversionError,
    ConversionReport,
};
pub use lattice::LatticeParams;
pub use parser::{parse_unit, ParsedUnit};
