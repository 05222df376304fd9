use serde::{Deserialize, Serialize};

/// 결과 값 출력 형식. 절댓값이 [fixed_min, fixed_max] 구간이면 고정 소수점,
/// 아니면 지수 표기를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub fixed_min: f64,
    pub fixed_max: f64,
    pub decimals: usize,
    pub volume_decimals: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            fixed_min: 1e-3,
            fixed_max: 1e3,
            decimals: 5,
            volume_decimals: 3,
        }
    }
}

impl DisplayOptions {
    pub fn format_value(&self, v: f64) -> String {
        let mag = v.abs();
        if v == 0.0 || (self.fixed_min..=self.fixed_max).contains(&mag) {
            format!("{v:.prec$}", prec = self.decimals)
        } else {
            format!("{v:.prec$e}", prec = self.decimals)
        }
    }

    /// 셀 부피는 항상 지수 표기 (예: 3.600e-29).
    pub fn format_volume(&self, v: f64) -> String {
        format!("{v:.prec$e}", prec = self.volume_decimals)
    }
}
