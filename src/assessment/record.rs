use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 검사 레코드 검증 오류를 표현한다.
#[derive(Debug)]
pub enum RecordError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for RecordError {}

/// 레코드 파일 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum RecordFileError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// 파싱은 성공했으나 값 검증에 실패한 경우
    Record(RecordError),
}

impl std::fmt::Display for RecordFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFileError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            RecordFileError::Parse(e) => write!(f, "레코드 파싱 오류: {e}"),
            RecordFileError::Record(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RecordFileError {}

impl From<std::io::Error> for RecordFileError {
    fn from(value: std::io::Error) -> Self {
        RecordFileError::Io(value)
    }
}

impl From<toml::de::Error> for RecordFileError {
    fn from(value: toml::de::Error) -> Self {
        RecordFileError::Parse(value)
    }
}

impl From<RecordError> for RecordFileError {
    fn from(value: RecordError) -> Self {
        RecordFileError::Record(value)
    }
}

/// 한 번의 Level-1 평가에 필요한 검사 레코드.
/// 생성 후 변경하지 않으며, 평가 엔진은 이 레코드만을 입력으로 받는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionRecord {
    /// 검사 위치 (예: 라인 번호)
    pub location: String,
    /// 재질 명칭 (예: SA-516 Gr.72)
    pub material: String,
    /// 설계/최대 압력 P [MPa]
    pub design_pressure_mpa: f64,
    /// 외경 OD [mm]
    pub outside_diameter_mm: f64,
    /// 공칭 두께 t_nom [mm]
    pub nominal_thickness_mm: f64,
    /// 최대 온도 기준 허용 응력 S [MPa]
    pub allowable_stress_mpa: f64,
    /// LTA 외부에서 측정한 두께 t_rd [mm]
    pub reference_thickness_mm: f64,
    /// LTA 내부 최소 측정 두께 t_mm [mm]
    pub min_measured_thickness_mm: f64,
    /// LTA 길이 방향 치수 s [mm]
    pub longitudinal_extent_mm: f64,
    /// LTA 원주 방향 치수 c [mm]. Level-1 식에서는 사용하지 않는다 (Level-2 대비 기록).
    pub circumferential_extent_mm: f64,
    /// 장래 부식 여유 FCA [mm]
    pub future_corrosion_allowance_mm: f64,
    /// 용접 이음 효율 E (0~1]
    pub weld_joint_efficiency: f64,
    /// 기계 가공 여유 MA [mm]
    pub mechanical_allowance_mm: f64,
    /// ASME B31 Y 계수: 탄소강 0.4, 합금강 0.7
    pub y_coefficient: f64,
    /// 허용 잔여 강도 계수 RSFa (표준 기본값 0.9)
    pub allowable_rsf: f64,
    /// 공칭 두께 기준 경과 운전 연수
    pub operating_years: f64,
}

impl InspectionRecord {
    /// 평가 전에 레코드 값의 유효성을 검사한다.
    /// 계산 단계는 검증된 레코드를 전제로 하므로 반드시 먼저 호출한다.
    pub fn validate(&self) -> Result<(), RecordError> {
        use RecordError::InvalidInput;

        if self.design_pressure_mpa <= 0.0 {
            return Err(InvalidInput("설계 압력은 0보다 커야 합니다."));
        }
        if self.outside_diameter_mm <= 0.0 {
            return Err(InvalidInput("외경은 0보다 커야 합니다."));
        }
        if self.nominal_thickness_mm <= 0.0 {
            return Err(InvalidInput("공칭 두께는 0보다 커야 합니다."));
        }
        if self.allowable_stress_mpa <= 0.0 {
            return Err(InvalidInput("허용 응력은 0보다 커야 합니다."));
        }
        if self.reference_thickness_mm <= 0.0 || self.min_measured_thickness_mm <= 0.0 {
            return Err(InvalidInput("측정 두께는 0보다 커야 합니다."));
        }
        if self.min_measured_thickness_mm > self.reference_thickness_mm {
            return Err(InvalidInput(
                "LTA 내부 최소 두께(t_mm)는 외부 측정 두께(t_rd)를 넘을 수 없습니다.",
            ));
        }
        if self.longitudinal_extent_mm <= 0.0 || self.circumferential_extent_mm <= 0.0 {
            return Err(InvalidInput("결함 치수 s, c는 0보다 커야 합니다."));
        }
        if self.future_corrosion_allowance_mm < 0.0 {
            return Err(InvalidInput("장래 부식 여유(FCA)는 음수일 수 없습니다."));
        }
        if self.weld_joint_efficiency <= 0.0 || self.weld_joint_efficiency > 1.0 {
            return Err(InvalidInput("용접 이음 효율 E는 (0, 1] 범위여야 합니다."));
        }
        if self.mechanical_allowance_mm < 0.0 {
            return Err(InvalidInput("기계 가공 여유(MA)는 음수일 수 없습니다."));
        }
        if self.y_coefficient != 0.4 && self.y_coefficient != 0.7 {
            return Err(InvalidInput("Y 계수는 0.4(탄소강) 또는 0.7(합금강)이어야 합니다."));
        }
        if self.allowable_rsf <= 0.0 || self.allowable_rsf >= 1.0 {
            return Err(InvalidInput("허용 잔여 강도 계수 RSFa는 (0, 1) 범위여야 합니다."));
        }
        if self.operating_years <= 0.0 {
            return Err(InvalidInput("운전 연수는 0보다 커야 합니다."));
        }
        if self.reference_thickness_mm - self.future_corrosion_allowance_mm <= 0.0 {
            return Err(InvalidInput("t_rd - FCA 는 0보다 커야 합니다."));
        }
        Ok(())
    }
}

/// TOML 레코드 파일을 로드하고 검증까지 수행한다.
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<InspectionRecord, RecordFileError> {
    let content = fs::read_to_string(path)?;
    let record: InspectionRecord = toml::from_str(&content)?;
    record.validate()?;
    Ok(record)
}
