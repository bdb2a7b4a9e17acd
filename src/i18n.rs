use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ASSESSMENT: &str = "main_menu.assessment";
    pub const MAIN_MENU_MATERIALS: &str = "main_menu.materials";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const ASSESSMENT_HEADING: &str = "assessment.heading";
    pub const PROMPT_LOCATION: &str = "prompt.location";
    pub const PROMPT_MATERIAL: &str = "prompt.material";
    pub const PROMPT_DESIGN_PRESSURE: &str = "prompt.design_pressure";
    pub const PROMPT_OUTSIDE_DIAMETER: &str = "prompt.outside_diameter";
    pub const PROMPT_NOMINAL_THICKNESS: &str = "prompt.nominal_thickness";
    pub const PROMPT_ALLOWABLE_STRESS: &str = "prompt.allowable_stress";
    pub const PROMPT_DB_TEMPERATURE: &str = "prompt.db_temperature";
    pub const DB_STRESS_APPLIED: &str = "assessment.db_stress_applied";
    pub const DB_MATERIAL_MISSING: &str = "assessment.db_material_missing";
    pub const PROMPT_REFERENCE_THICKNESS: &str = "prompt.reference_thickness";
    pub const PROMPT_MIN_MEASURED_THICKNESS: &str = "prompt.min_measured_thickness";
    pub const PROMPT_LONGITUDINAL_EXTENT: &str = "prompt.longitudinal_extent";
    pub const PROMPT_CIRCUMFERENTIAL_EXTENT: &str = "prompt.circumferential_extent";
    pub const PROMPT_FCA: &str = "prompt.fca";
    pub const PROMPT_WELD_EFFICIENCY: &str = "prompt.weld_efficiency";
    pub const PROMPT_MECHANICAL_ALLOWANCE: &str = "prompt.mechanical_allowance";
    pub const PROMPT_Y_COEFFICIENT: &str = "prompt.y_coefficient";
    pub const PROMPT_ALLOWABLE_RSF: &str = "prompt.allowable_rsf";
    pub const PROMPT_OPERATING_YEARS: &str = "prompt.operating_years";
    pub const PROMPT_SAVE_RECORD: &str = "prompt.save_record";
    pub const RECORD_SAVED: &str = "assessment.record_saved";

    pub const PRESSURE_UNIT_OPTIONS: &str = "unit.pressure_options";
    pub const LENGTH_UNIT_OPTIONS: &str = "unit.length_options";

    pub const MATERIALS_HEADING: &str = "materials.heading";
    pub const PROMPT_MATERIAL_CODE: &str = "materials.prompt_code";
    pub const MATERIAL_NOT_FOUND: &str = "materials.not_found";
    pub const MATERIAL_ALLOWABLE: &str = "materials.allowable";
    pub const MATERIAL_CLAMPED_NOTE: &str = "materials.clamped_note";
    pub const MATERIAL_Y: &str = "materials.y_coefficient";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_INPUTS_HEADING: &str = "report.inputs_heading";
    pub const REPORT_COMPONENT_TYPE: &str = "report.component_type";
    pub const REPORT_LOCATION: &str = "report.location";
    pub const REPORT_MATERIAL: &str = "report.material";
    pub const REPORT_DESIGN_PRESSURE: &str = "report.design_pressure";
    pub const REPORT_OUTSIDE_DIAMETER: &str = "report.outside_diameter";
    pub const REPORT_WELD_EFFICIENCY: &str = "report.weld_efficiency";
    pub const REPORT_NOMINAL_THICKNESS: &str = "report.nominal_thickness";
    pub const REPORT_MIN_MEASURED: &str = "report.min_measured";
    pub const REPORT_REFERENCE_THICKNESS: &str = "report.reference_thickness";
    pub const REPORT_OPERATING_YEARS: &str = "report.operating_years";

    pub const REPORT_ASSESSMENT_HEADING: &str = "report.assessment_heading";
    pub const REPORT_ALLOWABLE_STRESS: &str = "report.allowable_stress";
    pub const REPORT_FCA: &str = "report.fca";
    pub const REPORT_WALL_THICKNESS: &str = "report.wall_thickness";
    pub const REPORT_RT: &str = "report.rt";
    pub const REPORT_LAMBDA: &str = "report.lambda";
    pub const REPORT_SCREEN_RT: &str = "report.screen_rt";
    pub const REPORT_SCREEN_DEPTH: &str = "report.screen_depth";
    pub const REPORT_MAWP: &str = "report.mawp";
    pub const REPORT_FOLIAS: &str = "report.folias";
    pub const REPORT_RSF: &str = "report.rsf";
    pub const REPORT_MAWPR: &str = "report.mawpr";
    pub const REPORT_PRESSURE_CRITERIA: &str = "report.pressure_criteria";
    pub const REPORT_VERDICT_LABEL: &str = "report.verdict_label";

    pub const LABEL_PASS: &str = "label.pass";
    pub const LABEL_FAIL: &str = "label.fail";
    pub const LABEL_TRUE: &str = "label.true";
    pub const LABEL_FALSE: &str = "label.false";

    pub const VERDICT_ACCEPTABLE: &str = "verdict.acceptable";
    pub const VERDICT_FLAW_REJECTED: &str = "verdict.flaw_rejected";
    pub const VERDICT_PRESSURE_FAIL_PREFIX: &str = "verdict.pressure_fail_prefix";
    pub const VERDICT_PRESSURE_FAIL_SUFFIX: &str = "verdict.pressure_fail_suffix";

    pub const REPORT_LIFE_HEADING: &str = "report.life_heading";
    pub const REPORT_TMIN: &str = "report.tmin";
    pub const REPORT_CORROSION_RATE: &str = "report.corrosion_rate";
    pub const REPORT_REMAINING_LIFE: &str = "report.remaining_life";
    pub const REPORT_LIFE_UNLIMITED: &str = "report.life_unlimited";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pipe Integrity Toolbox ===",
        MAIN_MENU_ASSESSMENT => "1) Level-1 국부 감육(LTA) 평가",
        MAIN_MENU_MATERIALS => "2) 재질 허용 응력 조회",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ASSESSMENT_HEADING => "\n-- Level-1 LTA 평가 --",
        PROMPT_LOCATION => "검사 위치 (라인 번호 등): ",
        PROMPT_MATERIAL => "재질 (예: SA-516 Gr.72): ",
        PROMPT_DESIGN_PRESSURE => "설계/최대 압력 값: ",
        PROMPT_OUTSIDE_DIAMETER => "외경 OD 값: ",
        PROMPT_NOMINAL_THICKNESS => "공칭 두께 t_nom [mm]: ",
        PROMPT_ALLOWABLE_STRESS => "허용 응력 S [MPa] (0 입력 시 재질 DB 조회): ",
        PROMPT_DB_TEMPERATURE => "조회 온도 [°C]: ",
        DB_STRESS_APPLIED => "재질 DB 허용 응력 적용:",
        DB_MATERIAL_MISSING => "재질 DB에 없는 재질입니다. 허용 응력을 직접 입력하세요.",
        PROMPT_REFERENCE_THICKNESS => "LTA 외부 측정 두께 t_rd [mm]: ",
        PROMPT_MIN_MEASURED_THICKNESS => "LTA 내부 최소 두께 t_mm [mm]: ",
        PROMPT_LONGITUDINAL_EXTENT => "LTA 길이 방향 치수 s [mm]: ",
        PROMPT_CIRCUMFERENTIAL_EXTENT => "LTA 원주 방향 치수 c [mm]: ",
        PROMPT_FCA => "장래 부식 여유 FCA [mm] (없으면 0): ",
        PROMPT_WELD_EFFICIENCY => "용접 이음 효율 E (0~1, 이음매 없으면 1): ",
        PROMPT_MECHANICAL_ALLOWANCE => "기계 가공 여유 MA [mm] (없으면 0): ",
        PROMPT_Y_COEFFICIENT => "B31 Y 계수 (탄소강 0.4, 합금강 0.7): ",
        PROMPT_ALLOWABLE_RSF => "허용 잔여 강도 계수 RSFa (표준 0.9): ",
        PROMPT_OPERATING_YEARS => "경과 운전 연수: ",
        PROMPT_SAVE_RECORD => "레코드를 TOML 파일로 저장할 경로 (저장 안 하려면 엔터): ",
        RECORD_SAVED => "레코드를 저장했습니다:",
        PRESSURE_UNIT_OPTIONS => "압력 단위: 1=MPa 2=kPa 3=bar 4=kg/cm2 5=psi",
        LENGTH_UNIT_OPTIONS => "길이 단위: 1=mm 2=cm 3=m 4=in",
        MATERIALS_HEADING => "\n-- 재질 허용 응력 조회 --",
        PROMPT_MATERIAL_CODE => "재질 코드 (예: SA-106-B): ",
        MATERIAL_NOT_FOUND => "재질 DB에 없는 재질입니다.",
        MATERIAL_ALLOWABLE => "허용 응력:",
        MATERIAL_CLAMPED_NOTE => "(테이블 범위 밖이므로 가장자리 값 사용)",
        MATERIAL_Y => "B31 Y 계수:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        REPORT_TITLE => "=== API-579 Part 5 Level-1 LTA 평가 보고서 ===",
        REPORT_INPUTS_HEADING => "[입력]",
        REPORT_COMPONENT_TYPE => "구성품 종류: 배관(PIPE)",
        REPORT_LOCATION => "검사 위치:",
        REPORT_MATERIAL => "재질:",
        REPORT_DESIGN_PRESSURE => "설계/최대 압력 (P):",
        REPORT_OUTSIDE_DIAMETER => "외경 (OD):",
        REPORT_WELD_EFFICIENCY => "용접 이음 효율 (E):",
        REPORT_NOMINAL_THICKNESS => "공칭 두께 (t_nom):",
        REPORT_MIN_MEASURED => "LTA 내부 최소 두께 (t_mm):",
        REPORT_REFERENCE_THICKNESS => "LTA 외부 측정 두께 (t_rd):",
        REPORT_OPERATING_YEARS => "운전 연수:",
        REPORT_ASSESSMENT_HEADING => "[평가]",
        REPORT_ALLOWABLE_STRESS => "최대 온도 기준 허용 응력 (S):",
        REPORT_FCA => "장래 부식 여유 (FCA):",
        REPORT_WALL_THICKNESS => "평가용 벽 두께 t_c = t_rd - FCA =",
        REPORT_RT => "잔여 두께비 R_t = (t_mm - FCA) / t_c =",
        REPORT_LAMBDA => "결함 길이 파라미터 λ = 1.285·s / √(D·t_c) =",
        REPORT_SCREEN_RT => "한계 결함 크기 기준 R_t ≥ 0.2 :",
        REPORT_SCREEN_DEPTH => "한계 결함 크기 기준 t_mm - FCA ≥ 1.3 :",
        REPORT_MAWP => "MAWP = 2·S·E·(t_mm - MA) / (OD - 2·Y·(t_mm - MA)) =",
        REPORT_FOLIAS => "Folias 계수 M_t (Table 5.2, API-579) =",
        REPORT_RSF => "잔여 강도 계수 RSF (para 5.12, API-579) =",
        REPORT_MAWPR => "감소 최대 허용 사용 압력 MAWP_r =",
        REPORT_PRESSURE_CRITERIA => "압력 기준 판정:",
        REPORT_VERDICT_LABEL => "Level-1 결과:",
        LABEL_PASS => "PASS",
        LABEL_FAIL => "FAIL",
        LABEL_TRUE => "만족",
        LABEL_FALSE => "불만족",
        VERDICT_ACCEPTABLE => "현재 설계/최대 압력으로 운전 가능합니다.",
        VERDICT_FLAW_REJECTED => "현재 설계/최대 압력으로 운전할 수 없습니다.",
        VERDICT_PRESSURE_FAIL_PREFIX => {
            "현재 설계/최대 압력으로 운전할 수 없습니다. 안전 운전을 위해 최대 압력을"
        }
        VERDICT_PRESSURE_FAIL_SUFFIX => "MPa 이하로 제한할 것을 권고합니다.",
        REPORT_LIFE_HEADING => "[잔여 수명 평가]",
        REPORT_TMIN => "최소 요구 두께 t_min (para 2C.3.3, API-579) =",
        REPORT_CORROSION_RATE => "감육 속도 =",
        REPORT_REMAINING_LIFE => "잔여 수명 =",
        REPORT_LIFE_UNLIMITED => "감육이 관측되지 않아 잔여 수명을 산정하지 않습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pipe Integrity Toolbox ===",
        MAIN_MENU_ASSESSMENT => "1) Level-1 local metal loss (LTA) assessment",
        MAIN_MENU_MATERIALS => "2) Material allowable-stress lookup",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ASSESSMENT_HEADING => "\n-- Level-1 LTA Assessment --",
        PROMPT_LOCATION => "Inspection location (line number etc.): ",
        PROMPT_MATERIAL => "Material (ex: SA-516 Gr.72): ",
        PROMPT_DESIGN_PRESSURE => "Design/maximum pressure value: ",
        PROMPT_OUTSIDE_DIAMETER => "Outside diameter OD value: ",
        PROMPT_NOMINAL_THICKNESS => "Nominal thickness t_nom [mm]: ",
        PROMPT_ALLOWABLE_STRESS => "Allowable stress S [MPa] (0 = look up material DB): ",
        PROMPT_DB_TEMPERATURE => "Lookup temperature [°C]: ",
        DB_STRESS_APPLIED => "Applied allowable stress from material DB:",
        DB_MATERIAL_MISSING => "Material not in DB. Enter the allowable stress directly.",
        PROMPT_REFERENCE_THICKNESS => "Measured thickness away from LTA t_rd [mm]: ",
        PROMPT_MIN_MEASURED_THICKNESS => "Minimum measured thickness in LTA t_mm [mm]: ",
        PROMPT_LONGITUDINAL_EXTENT => "Longitudinal extent of LTA s [mm]: ",
        PROMPT_CIRCUMFERENTIAL_EXTENT => "Circumferential extent of LTA c [mm]: ",
        PROMPT_FCA => "Future corrosion allowance FCA [mm] (0 if none): ",
        PROMPT_WELD_EFFICIENCY => "Weld joint efficiency E (0~1, 1 if seamless): ",
        PROMPT_MECHANICAL_ALLOWANCE => "Mechanical allowance MA [mm] (0 if none): ",
        PROMPT_Y_COEFFICIENT => "B31 Y coefficient (0.4 carbon steel, 0.7 alloy steel): ",
        PROMPT_ALLOWABLE_RSF => "Allowable remaining strength factor RSFa (standard 0.9): ",
        PROMPT_OPERATING_YEARS => "Operating years: ",
        PROMPT_SAVE_RECORD => "Path to save record as TOML (enter to skip): ",
        RECORD_SAVED => "Record saved:",
        PRESSURE_UNIT_OPTIONS => "Pressure units: 1=MPa 2=kPa 3=bar 4=kg/cm2 5=psi",
        LENGTH_UNIT_OPTIONS => "Length units: 1=mm 2=cm 3=m 4=in",
        MATERIALS_HEADING => "\n-- Material Allowable-Stress Lookup --",
        PROMPT_MATERIAL_CODE => "Material code (ex: SA-106-B): ",
        MATERIAL_NOT_FOUND => "Material not found in DB.",
        MATERIAL_ALLOWABLE => "Allowable stress:",
        MATERIAL_CLAMPED_NOTE => "(outside table range; edge value used)",
        MATERIAL_Y => "B31 Y coefficient:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        REPORT_TITLE => "=== API-579 Part 5 Level-1 LTA Assessment Report ===",
        REPORT_INPUTS_HEADING => "[INPUTS]",
        REPORT_COMPONENT_TYPE => "Component type: PIPE",
        REPORT_LOCATION => "Location:",
        REPORT_MATERIAL => "Material:",
        REPORT_DESIGN_PRESSURE => "Design/maximum pressure (P):",
        REPORT_OUTSIDE_DIAMETER => "Outside diameter (OD):",
        REPORT_WELD_EFFICIENCY => "Weld joint efficiency (E):",
        REPORT_NOMINAL_THICKNESS => "Nominal thickness (t_nom):",
        REPORT_MIN_MEASURED => "Minimum measured thickness in LTA (t_mm):",
        REPORT_REFERENCE_THICKNESS => "Measured thickness away from LTA (t_rd):",
        REPORT_OPERATING_YEARS => "Operating years:",
        REPORT_ASSESSMENT_HEADING => "[ASSESSMENT]",
        REPORT_ALLOWABLE_STRESS => "Allowable stress at max temperature (S):",
        REPORT_FCA => "Future corrosion allowance (FCA):",
        REPORT_WALL_THICKNESS => "Wall thickness used in assessment t_c = t_rd - FCA =",
        REPORT_RT => "Remaining thickness ratio R_t = (t_mm - FCA) / t_c =",
        REPORT_LAMBDA => "Flaw length parameter λ = 1.285·s / √(D·t_c) =",
        REPORT_SCREEN_RT => "Limiting flaw size criterion R_t ≥ 0.2 :",
        REPORT_SCREEN_DEPTH => "Limiting flaw size criterion t_mm - FCA ≥ 1.3 :",
        REPORT_MAWP => "MAWP = 2·S·E·(t_mm - MA) / (OD - 2·Y·(t_mm - MA)) =",
        REPORT_FOLIAS => "Folias factor M_t (Table 5.2, API-579) =",
        REPORT_RSF => "Remaining strength factor RSF (para 5.12, API-579) =",
        REPORT_MAWPR => "Reduced maximum allowable working pressure MAWP_r =",
        REPORT_PRESSURE_CRITERIA => "Pressure criteria:",
        REPORT_VERDICT_LABEL => "Level-1 result:",
        LABEL_PASS => "PASS",
        LABEL_FAIL => "FAIL",
        LABEL_TRUE => "satisfied",
        LABEL_FALSE => "not satisfied",
        VERDICT_ACCEPTABLE => {
            "The component is acceptable to operate at the current design/maximum pressure."
        }
        VERDICT_FLAW_REJECTED => {
            "The component is unacceptable to operate at the current design/maximum pressure."
        }
        VERDICT_PRESSURE_FAIL_PREFIX => {
            "The component is unacceptable to operate at the current design/maximum pressure. \
             It is recommended to limit the maximum pressure to"
        }
        VERDICT_PRESSURE_FAIL_SUFFIX => "MPa for safe run.",
        REPORT_LIFE_HEADING => "[REMAINING LIFE ASSESSMENT]",
        REPORT_TMIN => "Minimum required thickness t_min (para 2C.3.3, API-579) =",
        REPORT_CORROSION_RATE => "Thinning rate =",
        REPORT_REMAINING_LIFE => "Remaining life =",
        REPORT_LIFE_UNLIMITED => "No measured wall loss; remaining life is not applicable.",
        _ => return None,
    })
}
