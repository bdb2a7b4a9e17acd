use crate::assessment::{AssessmentError, RecordFileError};
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 레코드 파일 로드 오류
    RecordFile(RecordFileError),
    /// Level-1 평가 오류
    Assessment(AssessmentError),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::RecordFile(e) => write!(f, "레코드 오류: {e}"),
            AppError::Assessment(e) => write!(f, "평가 오류: {e}"),
            AppError::Serialize(e) => write!(f, "직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<RecordFileError> for AppError {
    fn from(value: RecordFileError) -> Self {
        AppError::RecordFile(value)
    }
}

impl From<AssessmentError> for AppError {
    fn from(value: AssessmentError) -> Self {
        AppError::Assessment(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, mut tr: Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Assessment => {
                // 평가 오류는 레코드 하나에 국한되므로 루프를 끊지 않고 보고만 한다.
                if let Err(err) = ui_cli::handle_assessment(&tr, config) {
                    match err {
                        AppError::Assessment(e) => {
                            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
                        }
                        other => return Err(other),
                    }
                }
            }
            MenuChoice::Materials => ui_cli::handle_materials(&tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(&tr, config)?;
                config.save()?;
                if let Some(lang) = config.language.as_deref() {
                    tr = Translator::new(lang);
                }
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
