use std::path::PathBuf;

use clap::Parser;
use dew_point_explorer::{
    app::{self, AppError, OneShot},
    config,
    i18n::{self, keys, Translator},
    logging,
};

/// 이슬점 곡선 탐색기 CLI.
#[derive(Debug, Parser)]
#[command(name = "dew_point_explorer_cli", version, about)]
struct Args {
    /// 기온(°C). 이슬점과 함께 주면 결과만 출력하고 종료한다.
    #[arg(short = 't', long, allow_hyphen_values = true)]
    temperature: Option<String>,
    /// 이슬점(°C)
    #[arg(short = 'd', long = "dew-point", allow_hyphen_values = true)]
    dew_point: Option<String>,
    /// 상대습도(%). 기온과 함께 주면 이슬점을 계산한다.
    #[arg(long)]
    rh: Option<f64>,
    /// 언어(auto/da/en/ko-kr)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let args = Args::parse();
    let mut cfg = match config::load_or_default_from(&args.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            config::Config::default()
        }
    };
    logging::init(&cfg.log_filter);
    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    if let Err(err) = try_run(args, &mut cfg, &tr) {
        tracing::error!(%err, "run failed");
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(args: Args, cfg: &mut config::Config, tr: &Translator) -> Result<(), AppError> {
    let request = OneShot {
        temperature: args.temperature,
        dew_point: args.dew_point,
        rh: args.rh,
    };
    if request.is_empty() {
        return app::run(cfg, tr);
    }
    print!("{}", app::run_once(&request, cfg, tr)?);
    Ok(())
}
