use pipe_integrity_toolbox::assessment::{assess, InspectionRecord};
use pipe_integrity_toolbox::i18n::Translator;
use pipe_integrity_toolbox::report;

fn reference_record() -> InspectionRecord {
    InspectionRecord {
        location: "8\"-P-F1N-1323".to_string(),
        material: "SA-516 Gr.72".to_string(),
        design_pressure_mpa: 4.31,
        outside_diameter_mm: 219.0,
        nominal_thickness_mm: 23.01,
        allowable_stress_mpa: 172.37,
        reference_thickness_mm: 19.32,
        min_measured_thickness_mm: 5.3,
        longitudinal_extent_mm: 100.0,
        circumferential_extent_mm: 100.0,
        future_corrosion_allowance_mm: 0.0,
        weld_joint_efficiency: 1.0,
        mechanical_allowance_mm: 0.0,
        y_coefficient: 0.4,
        allowable_rsf: 0.9,
        operating_years: 12.0,
    }
}

#[test]
fn acceptable_report_contains_all_sections() {
    let record = reference_record();
    let result = assess(&record).expect("level1 assess");
    let tr = Translator::new("en");
    let text = report::render(&record, &result, &tr);

    assert!(text.contains("[INPUTS]"));
    assert!(text.contains("8\"-P-F1N-1323"));
    assert!(text.contains("MAWP"));
    assert!(text.contains("4.519"));
    assert!(text.contains("Pressure criteria: PASS"));
    assert!(text.contains("acceptable to operate"));
    assert!(text.contains("[REMAINING LIFE ASSESSMENT]"));
    assert!(text.contains("1.745"));
}

#[test]
fn pressure_fail_report_recommends_limit_and_omits_life() {
    let mut record = reference_record();
    record.design_pressure_mpa = 6.0;
    let result = assess(&record).expect("level1 assess");
    let tr = Translator::new("en");
    let text = report::render(&record, &result, &tr);

    assert!(text.contains("Pressure criteria: FAIL"));
    assert!(text.contains("limit the maximum pressure to 4.519 MPa"));
    assert!(!text.contains("[REMAINING LIFE ASSESSMENT]"));
}

#[test]
fn flaw_rejected_report_omits_pressure_section() {
    let mut record = reference_record();
    record.min_measured_thickness_mm = 3.0;
    let result = assess(&record).expect("level1 assess");
    let tr = Translator::new("en");
    let text = report::render(&record, &result, &tr);

    assert!(!text.contains("MAWP"));
    assert!(!text.contains("[REMAINING LIFE ASSESSMENT]"));
    assert!(text.contains("unacceptable to operate"));
    // 판정문은 고정 문장 하나이고, 사유는 기준 판별 행이 전달한다.
    assert!(text.contains("Limiting flaw size criterion R_t ≥ 0.2 : not satisfied"));
    assert!(!text.contains("It is recommended"));
}

#[test]
fn korean_report_renders_verdict() {
    let record = reference_record();
    let result = assess(&record).expect("level1 assess");
    let tr = Translator::new("ko");
    let text = report::render(&record, &result, &tr);
    assert!(text.contains("운전 가능"));
    assert!(text.contains("[잔여 수명 평가]"));
}

#[test]
fn zero_loss_report_states_life_not_applicable() {
    let mut record = reference_record();
    record.nominal_thickness_mm = 19.32;
    record.reference_thickness_mm = 19.32;
    record.min_measured_thickness_mm = 19.32;
    let result = assess(&record).expect("level1 assess");
    let tr = Translator::new("en");
    let text = report::render(&record, &result, &tr);
    assert!(text.contains("remaining life is not applicable"));
}
