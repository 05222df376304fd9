use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use magnet_units::app::{self, AppError};
use magnet_units::config;
use magnet_units::i18n::{self, Translator};

/// 자성 단위 변환기. 서브커맨드 없이 실행하면 대화형 모드로 동작한다.
#[derive(Debug, Parser)]
#[command(name = "magnet_units", version, about = "Conversion between magnetic units")]
struct Cli {
    /// 출력 언어 (auto, ko, en)
    #[arg(long, global = true, default_value = "auto")]
    lang: String,

    /// 설정 파일 경로 (기본: ./magnet_units.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 값 하나를 변환한다
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        /// 격자 상수 a b c [Å] (muB/fu <-> T 전용)
        #[arg(long, num_args = 3, value_names = ["A", "B", "C"], allow_negative_numbers = true)]
        abc: Option<Vec<f64>>,
        /// gamma [deg], 90 또는 120
        #[arg(long, allow_negative_numbers = true)]
        gamma: Option<f64>,
        /// 단위 셀당 식 단위 수
        #[arg(long)]
        fu: Option<u32>,
    },
    /// 공백으로 구분된 값들을 한 번에 변환한다
    Batch {
        from: String,
        to: String,
        /// 입력 파일 (없으면 표준 입력)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// 사용 가능한 단위와 접두어 목록
    Units,
    /// 변환 계수 목록
    Conversions,
    /// 적용 중인 설정을 TOML 로 출력
    Config,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 모드를 실행한다.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let cfg = match config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
            app::report_error(&tr, &AppError::from(err));
            return ExitCode::FAILURE;
        }
    };
    let tr = Translator::new(&i18n::resolve_language(&cli.lang, Some(cfg.language.as_str())));

    match try_run(cli.command, &cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            app::report_error(&tr, &err);
            ExitCode::FAILURE
        }
    }
}

fn try_run(command: Option<Command>, cfg: &config::Config, tr: &Translator) -> Result<(), AppError> {
    let Some(command) = command else {
        return app::run_interactive(cfg, tr);
    };
    let mut out = io::stdout().lock();
    match command {
        Command::Convert {
            value,
            from,
            to,
            abc,
            gamma,
            fu,
        } => {
            let lattice = app::lattice_from_args(abc.as_deref(), gamma, fu)?;
            app::run_convert(cfg, value, &from, &to, lattice.as_ref(), &mut out)
        }
        Command::Batch { from, to, input } => {
            let text = app::read_batch_input(input.as_deref())?;
            app::run_batch(cfg, &from, &to, &text, &mut out)
        }
        Command::Units => app::run_units(tr, &mut out),
        Command::Conversions => app::run_conversions(tr, &mut out),
        Command::Config => app::run_show_config(cfg, &mut out),
    }
}
