use clap::Parser;
use pipe_integrity_toolbox::{app, assessment, config, i18n, report};

/// 배관 국부 감육(LTA)에 대한 Level-1 적합성 평가 도구.
#[derive(Debug, Parser)]
#[command(name = "pipe_integrity_toolbox")]
struct Cli {
    /// UI 언어 (ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// TOML 검사 레코드 파일. 지정하면 대화형 메뉴 없이 평가하고 보고서를 출력한다.
    #[arg(long)]
    record: Option<std::path::PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new(&lang);

    if let Some(path) = cli.record {
        let record = assessment::load_record(path)?;
        let result = assessment::assess(&record)?;
        println!("{}", report::render(&record, &result, &tr));
        return Ok(());
    }

    app::run(&mut cfg, tr)?;
    Ok(())
}
