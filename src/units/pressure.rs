use serde::{Deserialize, Serialize};

/// 압력/응력 단위. 내부 기준은 항상 MPa이다.
/// B31 계산식이 MPa·mm 기준이므로 평가 레코드에 넣기 전에 MPa로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    MegaPascal,
    KiloPascal,
    Bar,
    KgPerCm2,
    Psi,
}

const BAR_PER_MPA: f64 = 10.0;
const PSI_PER_MPA: f64 = 145.0377;
const KGCM2_PER_MPA: f64 = 10.19716;

/// 주어진 압력을 MPa 로 변환한다.
pub fn to_mpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MegaPascal => value,
        PressureUnit::KiloPascal => value / 1000.0,
        PressureUnit::Bar => value / BAR_PER_MPA,
        PressureUnit::KgPerCm2 => value / KGCM2_PER_MPA,
        PressureUnit::Psi => value / PSI_PER_MPA,
    }
}

/// MPa 값을 원하는 단위로 변환한다.
pub fn from_mpa(value_mpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MegaPascal => value_mpa,
        PressureUnit::KiloPascal => value_mpa * 1000.0,
        PressureUnit::Bar => value_mpa * BAR_PER_MPA,
        PressureUnit::KgPerCm2 => value_mpa * KGCM2_PER_MPA,
        PressureUnit::Psi => value_mpa * PSI_PER_MPA,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let mpa = to_mpa(value, from);
    from_mpa(mpa, to)
}
