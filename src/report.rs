use crate::assessment::{AssessmentResult, InspectionRecord, Level1Outcome};
use crate::i18n::{keys, Translator};

/// 평가 결과를 텍스트 보고서로 렌더링한다.
/// 종결 상태에 존재하지 않는 값(예: 결함 크기 기준 불만족 시 MAWP_r)은
/// 해당 섹션을 생략하는 방식으로 처리한다.
pub fn render(record: &InspectionRecord, result: &AssessmentResult, tr: &Translator) -> String {
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    line(tr.t(keys::REPORT_TITLE).to_string());
    line(tr.t(keys::REPORT_INPUTS_HEADING).to_string());
    line(tr.t(keys::REPORT_COMPONENT_TYPE).to_string());
    line(format!("{} {}", tr.t(keys::REPORT_LOCATION), record.location));
    line(format!("{} {}", tr.t(keys::REPORT_MATERIAL), record.material));
    line(format!(
        "{} {} MPa",
        tr.t(keys::REPORT_DESIGN_PRESSURE),
        record.design_pressure_mpa
    ));
    line(format!(
        "{} {} mm",
        tr.t(keys::REPORT_OUTSIDE_DIAMETER),
        record.outside_diameter_mm
    ));
    line(format!(
        "{} {}",
        tr.t(keys::REPORT_WELD_EFFICIENCY),
        record.weld_joint_efficiency
    ));
    line(format!(
        "{} {} mm",
        tr.t(keys::REPORT_NOMINAL_THICKNESS),
        record.nominal_thickness_mm
    ));
    line(format!(
        "{} {} mm",
        tr.t(keys::REPORT_MIN_MEASURED),
        record.min_measured_thickness_mm
    ));
    line(format!(
        "{} {} mm",
        tr.t(keys::REPORT_REFERENCE_THICKNESS),
        record.reference_thickness_mm
    ));
    line(format!(
        "{} {}",
        tr.t(keys::REPORT_OPERATING_YEARS),
        record.operating_years
    ));

    line(tr.t(keys::REPORT_ASSESSMENT_HEADING).to_string());
    line(format!(
        "{} {} MPa",
        tr.t(keys::REPORT_ALLOWABLE_STRESS),
        record.allowable_stress_mpa
    ));
    line(format!(
        "{} {} mm",
        tr.t(keys::REPORT_FCA),
        record.future_corrosion_allowance_mm
    ));

    let geometry = &result.geometry;
    line(format!(
        "{} {:.3} mm",
        tr.t(keys::REPORT_WALL_THICKNESS),
        geometry.wall_thickness_mm
    ));
    line(format!(
        "{} {:.3}",
        tr.t(keys::REPORT_RT),
        geometry.remaining_thickness_ratio
    ));
    line(format!(
        "{} {:.3}",
        tr.t(keys::REPORT_LAMBDA),
        geometry.flaw_length_parameter
    ));

    let rt_ok = geometry.remaining_thickness_ratio >= 0.2;
    let depth_ok =
        record.min_measured_thickness_mm - record.future_corrosion_allowance_mm >= 1.3;
    line(format!(
        "{} {}",
        tr.t(keys::REPORT_SCREEN_RT),
        tr.t(if rt_ok { keys::LABEL_TRUE } else { keys::LABEL_FALSE })
    ));
    line(format!(
        "{} {}",
        tr.t(keys::REPORT_SCREEN_DEPTH),
        tr.t(if depth_ok { keys::LABEL_TRUE } else { keys::LABEL_FALSE })
    ));

    if let Some(rating) = result.outcome.pressure_rating() {
        line(format!(
            "{} {:.3} MPa",
            tr.t(keys::REPORT_MAWP),
            rating.mawp_mpa
        ));
        line(format!(
            "{} {:.3}",
            tr.t(keys::REPORT_FOLIAS),
            rating.folias_factor
        ));
        line(format!(
            "{} {:.3}",
            tr.t(keys::REPORT_RSF),
            rating.remaining_strength_factor
        ));
        line(format!(
            "{} {:.3} MPa",
            tr.t(keys::REPORT_MAWPR),
            rating.reduced_mawp_mpa
        ));
        let criteria = if result.outcome.is_acceptable() {
            keys::LABEL_PASS
        } else {
            keys::LABEL_FAIL
        };
        line(format!(
            "{} {}",
            tr.t(keys::REPORT_PRESSURE_CRITERIA),
            tr.t(criteria)
        ));
    }

    line(format!(
        "{} {}",
        tr.t(keys::REPORT_VERDICT_LABEL),
        verdict_line(&result.outcome, tr)
    ));

    if let Some(life) = result.outcome.remaining_life() {
        line(tr.t(keys::REPORT_LIFE_HEADING).to_string());
        line(format!(
            "{} {:.3} mm",
            tr.t(keys::REPORT_TMIN),
            life.minimum_required_thickness_mm
        ));
        line(format!(
            "{} {:.7} mm/yr",
            tr.t(keys::REPORT_CORROSION_RATE),
            life.corrosion_rate_mm_per_year
        ));
        match life.remaining_life_years {
            Some(years) => line(format!(
                "{} {:.3} yr",
                tr.t(keys::REPORT_REMAINING_LIFE),
                years
            )),
            None => line(tr.t(keys::REPORT_LIFE_UNLIMITED).to_string()),
        }
    }

    out
}

/// 종결 상태에 대응하는 판정 문장을 만든다.
/// 압력 기준 불만족 시 권고 제한 압력(MAWP_r)을 문장에 포함한다.
pub fn verdict_line(outcome: &Level1Outcome, tr: &Translator) -> String {
    match outcome {
        Level1Outcome::FlawSizeRejected => tr.t(keys::VERDICT_FLAW_REJECTED).to_string(),
        Level1Outcome::PressureFail { rating } => format!(
            "{} {:.3} {}",
            tr.t(keys::VERDICT_PRESSURE_FAIL_PREFIX),
            rating.reduced_mawp_mpa,
            tr.t(keys::VERDICT_PRESSURE_FAIL_SUFFIX)
        ),
        Level1Outcome::Acceptable { .. } => tr.t(keys::VERDICT_ACCEPTABLE).to_string(),
    }
}
