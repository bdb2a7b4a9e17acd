use crate::assessment::record::InspectionRecord;
use crate::assessment::round_to;

/// 잔여 수명 추정 결과. 압력 기준을 통과한 레코드에만 생성된다.
#[derive(Debug, Clone, Copy)]
pub struct RemainingLife {
    /// 설계 압력 기준 최소 요구 두께 t_min [mm]
    pub minimum_required_thickness_mm: f64,
    /// 선형 감육 속도 [mm/년] (소수 7자리)
    pub corrosion_rate_mm_per_year: f64,
    /// 잔여 수명 [년]. 감육이 관측되지 않으면 None이며 "수명 제한 없음"으로 보고한다.
    pub remaining_life_years: Option<f64>,
}

/// 선형 감육 속도 가정으로 잔여 수명을 추정한다.
/// 감육 속도가 0 이하(t_nom ≤ t_mm)면 나눗셈을 수행하지 않는다.
pub fn estimate(record: &InspectionRecord) -> RemainingLife {
    let p = record.design_pressure_mpa;
    let t_min = round_to(
        (p * record.outside_diameter_mm)
            / (2.0 * record.allowable_stress_mpa * record.weld_joint_efficiency
                + p * record.y_coefficient),
        3,
    );
    let rate = round_to(
        (record.nominal_thickness_mm - record.min_measured_thickness_mm)
            / record.operating_years,
        7,
    );
    let life = if rate > 0.0 {
        Some(round_to(
            (record.min_measured_thickness_mm - t_min) / rate,
            3,
        ))
    } else {
        None
    };
    RemainingLife {
        minimum_required_thickness_mm: t_min,
        corrosion_rate_mm_per_year: rate,
        remaining_life_years: life,
    }
}
