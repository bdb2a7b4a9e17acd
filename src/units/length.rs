use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 밀리미터이다.
/// 두께/직경/결함 길이 입력을 모두 mm로 환산한 뒤 평가에 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Inch,
}

fn to_mm(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value,
        LengthUnit::Centimeter => value * 10.0,
        LengthUnit::Meter => value * 1000.0,
        LengthUnit::Inch => value * 25.4,
    }
}

fn from_mm(value_mm: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value_mm,
        LengthUnit::Centimeter => value_mm / 10.0,
        LengthUnit::Meter => value_mm / 1000.0,
        LengthUnit::Inch => value_mm / 25.4,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let mm = to_mm(value, from);
    from_mm(mm, to)
}
