use crate::assessment::folias::folias_factor;
use crate::assessment::record::{InspectionRecord, RecordError};
use crate::assessment::remaining_life::{self, RemainingLife};
use crate::assessment::round_to;

/// Level-1 평가 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AssessmentError {
    /// 레코드 검증 실패
    Record(RecordError),
    /// 기하 조건이 퇴화하여 식이 정의되지 않는 경우
    DegenerateGeometry(&'static str),
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentError::Record(e) => write!(f, "{e}"),
            AssessmentError::DegenerateGeometry(msg) => write!(f, "계산 불가: {msg}"),
        }
    }
}

impl std::error::Error for AssessmentError {}

impl From<RecordError> for AssessmentError {
    fn from(value: RecordError) -> Self {
        AssessmentError::Record(value)
    }
}

/// 기하/비율 단계 결과 (STEP 2~4).
#[derive(Debug, Clone, Copy)]
pub struct GeometryStage {
    /// 평가에 사용하는 벽 두께 t_c = t_rd - FCA [mm]
    pub wall_thickness_mm: f64,
    /// 일반 감육량 t_nom - t_rd [mm]
    pub metal_loss_mm: f64,
    /// 유효 직경 D [mm]
    pub effective_diameter_mm: f64,
    /// 잔여 두께비 R_t (소수 3자리)
    pub remaining_thickness_ratio: f64,
    /// 길이 방향 결함 길이 파라미터 λ (소수 3자리)
    pub flaw_length_parameter: f64,
}

/// 압력 등급 단계 결과 (STEP 7).
#[derive(Debug, Clone, Copy)]
pub struct PressureRating {
    /// 손상 전 기준 최대 허용 사용 압력 MAWP [MPa]
    pub mawp_mpa: f64,
    /// Folias 계수 M_t
    pub folias_factor: f64,
    /// 잔여 강도 계수 RSF
    pub remaining_strength_factor: f64,
    /// LTA를 반영해 감소시킨 MAWP_r [MPa]
    pub reduced_mawp_mpa: f64,
}

/// Level-1 평가의 세 가지 종결 상태.
/// 각 상태는 그 상태에서만 유효한 값을 갖는다. 예를 들어 잔여 수명은
/// 압력 기준을 통과한 경우에만 존재한다.
#[derive(Debug, Clone, Copy)]
pub enum Level1Outcome {
    /// STEP 5 한계 결함 크기 기준 불만족. 하류 계산은 수행하지 않는다.
    FlawSizeRejected,
    /// 압력 기준 불만족. 최대 압력을 reduced_mawp_mpa 이하로 제한해야 한다.
    PressureFail { rating: PressureRating },
    /// 현재 설계/최대 압력으로 운전 가능.
    Acceptable {
        rating: PressureRating,
        life: RemainingLife,
    },
}

impl Level1Outcome {
    /// 압력 등급 단계까지 진행된 경우 그 결과를 반환한다.
    pub fn pressure_rating(&self) -> Option<&PressureRating> {
        match self {
            Level1Outcome::FlawSizeRejected => None,
            Level1Outcome::PressureFail { rating } => Some(rating),
            Level1Outcome::Acceptable { rating, .. } => Some(rating),
        }
    }

    /// 잔여 수명 추정 결과. 압력 기준 PASS인 경우에만 존재한다.
    pub fn remaining_life(&self) -> Option<&RemainingLife> {
        match self {
            Level1Outcome::Acceptable { life, .. } => Some(life),
            _ => None,
        }
    }

    pub fn is_acceptable(&self) -> bool {
        matches!(self, Level1Outcome::Acceptable { .. })
    }
}

/// 레코드 하나에 대한 Level-1 평가 결과.
#[derive(Debug, Clone, Copy)]
pub struct AssessmentResult {
    pub geometry: GeometryStage,
    pub outcome: Level1Outcome,
}

/// STEP 2~4: 평가용 벽 두께, 잔여 두께비, 결함 길이 파라미터를 계산한다.
pub fn geometry_stage(record: &InspectionRecord) -> Result<GeometryStage, AssessmentError> {
    let tc = record.reference_thickness_mm - record.future_corrosion_allowance_mm;
    if tc <= 0.0 {
        return Err(RecordError::InvalidInput("t_rd - FCA 는 0보다 커야 합니다.").into());
    }
    let metal_loss = record.nominal_thickness_mm - record.reference_thickness_mm;
    let effective_diameter = (record.outside_diameter_mm - 2.0 * record.nominal_thickness_mm)
        + 2.0 * (record.future_corrosion_allowance_mm + metal_loss);
    if effective_diameter * tc <= 0.0 {
        return Err(AssessmentError::DegenerateGeometry(
            "유효 직경 D·t_c 가 0 이하여서 λ를 정의할 수 없습니다.",
        ));
    }
    let rt = round_to(
        (record.min_measured_thickness_mm - record.future_corrosion_allowance_mm) / tc,
        3,
    );
    let lambda = round_to(
        (1.285 * record.longitudinal_extent_mm) / (effective_diameter * tc).sqrt(),
        3,
    );
    Ok(GeometryStage {
        wall_thickness_mm: tc,
        metal_loss_mm: metal_loss,
        effective_diameter_mm: effective_diameter,
        remaining_thickness_ratio: rt,
        flaw_length_parameter: lambda,
    })
}

/// STEP 5: 한계 결함 크기 기준. 두 조건 모두 경계 포함(≥)이다.
pub fn limiting_flaw_size(record: &InspectionRecord, geometry: &GeometryStage) -> bool {
    let depth_ok =
        record.min_measured_thickness_mm - record.future_corrosion_allowance_mm >= 1.3;
    geometry.remaining_thickness_ratio >= 0.2 && depth_ok
}

/// STEP 7: MAWP, Folias 계수, RSF, MAWP_r을 계산한다.
pub fn pressure_rating_stage(
    record: &InspectionRecord,
    geometry: &GeometryStage,
) -> Result<PressureRating, AssessmentError> {
    let t = record.min_measured_thickness_mm - record.mechanical_allowance_mm;
    let denominator = record.outside_diameter_mm - 2.0 * record.y_coefficient * t;
    if denominator <= 0.0 {
        return Err(AssessmentError::DegenerateGeometry(
            "MAWP 분모(OD - 2Y(t_mm - MA))가 0 이하입니다.",
        ));
    }
    let mawp = round_to(
        (2.0 * record.allowable_stress_mpa * record.weld_joint_efficiency * t) / denominator,
        3,
    );

    let mt = folias_factor(geometry.flaw_length_parameter);
    let rt = geometry.remaining_thickness_ratio;
    // RSF = Rt / (1 - (1/Mt)(1 - Rt)). 분모가 0이 되는 퇴화 기하는 명시적으로 거른다.
    let bracket = 1.0 - (1.0 / mt) * (1.0 - rt);
    if bracket <= 0.0 {
        return Err(AssessmentError::DegenerateGeometry(
            "M_t와 R_t 조합으로 RSF 분모가 0 이하입니다.",
        ));
    }
    let rsf = round_to(rt / bracket, 3);

    let reduced_mawp = if rsf >= record.allowable_rsf {
        mawp
    } else {
        round_to(mawp * (rsf / record.allowable_rsf), 3)
    };

    Ok(PressureRating {
        mawp_mpa: mawp,
        folias_factor: mt,
        remaining_strength_factor: rsf,
        reduced_mawp_mpa: reduced_mawp,
    })
}

/// 검사 레코드 하나에 대해 Level-1 평가 절차 전체를 수행한다.
/// 절차는 결정적이며 레코드 외의 상태를 읽거나 쓰지 않는다.
pub fn assess(record: &InspectionRecord) -> Result<AssessmentResult, AssessmentError> {
    record.validate()?;

    let geometry = geometry_stage(record)?;

    if !limiting_flaw_size(record, &geometry) {
        return Ok(AssessmentResult {
            geometry,
            outcome: Level1Outcome::FlawSizeRejected,
        });
    }

    let rating = pressure_rating_stage(record, &geometry)?;

    let pass = rating.reduced_mawp_mpa >= record.design_pressure_mpa
        || rating.reduced_mawp_mpa >= rating.mawp_mpa;
    let outcome = if pass {
        let life = remaining_life::estimate(record);
        Level1Outcome::Acceptable { rating, life }
    } else {
        Level1Outcome::PressureFail { rating }
    };

    Ok(AssessmentResult { geometry, outcome })
}
