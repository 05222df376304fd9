//! 단위 정의 모듈 모음.

pub mod base;
pub mod prefix;

pub use base::BaseUnit;
pub use prefix::Prefix;
