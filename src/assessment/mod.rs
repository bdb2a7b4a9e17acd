//! 배관 국부 감육(LTA)에 대한 API-579 Part 5 Level-1 적합성 평가 모듈.

pub mod folias;
pub mod level1;
pub mod record;
pub mod remaining_life;

pub use folias::folias_factor;
pub use level1::{
    assess, AssessmentError, AssessmentResult, GeometryStage, Level1Outcome, PressureRating,
};
pub use record::{load_record, InspectionRecord, RecordError, RecordFileError};
pub use remaining_life::RemainingLife;

/// 지정한 소수 자릿수로 반올림한다.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
