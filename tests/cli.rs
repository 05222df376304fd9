//! 대화형 세션과 서브커맨드 동작 테스트. 표준 입출력 대신 메모리 버퍼를 쓴다.
use magnet_units::app::{self, AppError};
use magnet_units::config::{self, Config, ConfigError};
use magnet_units::format::DisplayOptions;
use magnet_units::i18n::{self, keys, Language, Translator};
use magnet_units::ui_cli::{parse_command, Command, Session};
use magnet_units::ConversionError;

fn run_session(input: &str) -> String {
    let tr = Translator::new("en");
    let mut out = Vec::new();
    Session::new(input.as_bytes(), &mut out, &tr, DisplayOptions::default())
        .run()
        .expect("session");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn parse_commands() {
    assert_eq!(parse_command("q").expect("q"), Command::Quit);
    assert_eq!(parse_command(" units ").expect("units"), Command::Units);
    assert_eq!(parse_command("conv").expect("conv"), Command::Conversions);
    assert_eq!(
        parse_command("6 T A/m").expect("convert"),
        Command::Convert {
            value: 6.0,
            from: "T".to_string(),
            to: "A/m".to_string(),
        }
    );
    assert_eq!(
        parse_command("-2.5e3   mT  G").expect("negative"),
        Command::Convert {
            value: -2500.0,
            from: "mT".to_string(),
            to: "G".to_string(),
        }
    );
    assert!(matches!(parse_command("6 T"), Err(AppError::Input(_))));
    assert!(matches!(parse_command("six T G"), Err(AppError::Input(_))));
}

#[test]
fn session_converts_and_quits() {
    let out = run_session("1 T G\nq\n");
    assert!(out.contains("*****Conversion between magnetic units.*****"), "{out}");
    assert!(out.contains("1 T = 1.00000e4 G"), "{out}");
    assert!(out.trim_end().ends_with("Exiting."), "{out}");
}

#[test]
fn session_prompts_for_lattice() {
    let out = run_session("2.3 muB/fu T\n3 3 4\n90\n2\nq\n");
    assert!(out.contains("a b c: "), "{out}");
    assert!(out.contains("Please enter gamma in deg. (90 or 120): "), "{out}");
    assert!(out.contains("f.u./unit cell: "), "{out}");
    assert!(
        out.contains("2.3 muB/fu = 1.48913 T (2 f.u./unit cell, cell volume = 3.600e-29 m^3)"),
        "{out}"
    );
}

#[test]
fn session_reports_errors_and_keeps_going() {
    let out = run_session("1 Xyz T\n1 T emu\n2.3 muB/fu T\n3 3 4\n45\n2\nhello\n1 G Oe\nq\n");
    assert!(out.contains("Error: unit not recognised: \"Xyz\""), "{out}");
    assert!(out.contains("Error: conversion not available: T to emu"), "{out}");
    assert!(out.contains("unsupported cell geometry: gamma = 45"), "{out}");
    assert!(out.contains("Error: invalid input: expected: <value> <startunit> <endunit>"), "{out}");
    assert!(out.contains("1 G = 1.00000 Oe"), "{out}");
}

#[test]
fn session_keeps_input_error_detail() {
    let out = run_session("six T G\nhello\nq\n");
    assert!(
        out.contains("Error: invalid input: expected: <value> <startunit> <endunit> (not a number: \"six\")"),
        "{out}"
    );
    assert!(out.contains("<endunit> (got \"hello\")"), "{out}");
}

#[test]
fn session_rejects_bad_lattice_text() {
    let out = run_session("1 T muB/fu\n3 x 4\nq\n");
    assert!(out.contains("invalid lattice input: a b c must be numbers"), "{out}");
    let out = run_session("1 T muB/fu\n3 3\nq\n");
    assert!(out.contains("expected 3 lattice parameters, got 2"), "{out}");
    let out = run_session("1 T muB/fu\n3 3 4\n90\n-1\nq\n");
    assert!(out.contains("formula units per cell must be a positive integer"), "{out}");
}

#[test]
fn session_ends_on_eof() {
    let out = run_session("1 T G\n");
    assert!(out.trim_end().ends_with("Exiting."), "{out}");
    let out = run_session("2.3 muB/fu T\n3 3 4\n");
    assert!(out.trim_end().ends_with("Exiting."), "{out}");
}

#[test]
fn session_lists_units_and_conversions() {
    let out = run_session("units\nconv\nq\n");
    assert!(out.contains("flux density: T, G"), "{out}");
    assert!(out.contains("moment per formula unit: muB/fu"), "{out}");
    assert!(out.contains("M (1e6), k (1e3), m (1e-3)"), "{out}");
    assert!(out.contains("       A/m  <->  Oe        :    1e4 * MU_0"), "{out}");
    assert!(out.contains("    muB/fu  <->  T         :    requires lattice parameters"), "{out}");
}

#[test]
fn korean_session_uses_translations() {
    let tr = Translator::new("ko");
    assert_eq!(tr.language(), Language::Ko);
    let mut out = Vec::new();
    Session::new("q\n".as_bytes(), &mut out, &tr, DisplayOptions::default())
        .run()
        .expect("session");
    let out = String::from_utf8(out).expect("utf8");
    assert!(out.contains(tr.t(keys::BANNER)), "{out}");
    assert!(out.contains("프로그램을 종료합니다."), "{out}");
    // 번역이 없는 키는 영어로 폴백
    assert_eq!(tr.t(keys::PROMPT_INPUT), "\nInput: ");
}

#[test]
fn language_resolution_order() {
    assert_eq!(i18n::resolve_language("ko", Some("en")), "ko");
    assert_eq!(i18n::resolve_language("auto", Some("en")), "en");
    assert_eq!(i18n::resolve_language("EN-us", None), "en");
    assert_eq!(Translator::new("fr").language(), Language::En);
}

#[test]
fn one_shot_convert_output() {
    let cfg = Config::default();
    let mut out = Vec::new();
    app::run_convert(&cfg, 1.0, "A/m", "mT", None, &mut out).expect("convert");
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.starts_with("1 A/m = 0.00126 mT"), "{text}");

    let lattice = app::lattice_from_args(Some(&[3.0, 3.0, 4.0][..]), Some(90.0), Some(2)).expect("lattice");
    let mut out = Vec::new();
    app::run_convert(&cfg, 2.3, "muB/fu", "T", lattice.as_ref(), &mut out).expect("lattice convert");
    assert!(String::from_utf8(out).expect("utf8").contains("1.48913 T"));
}

#[test]
fn lattice_arguments_must_come_together() {
    assert_eq!(app::lattice_from_args(None, None, None).expect("none"), None);
    assert!(matches!(
        app::lattice_from_args(Some(&[3.0, 3.0, 4.0][..]), None, Some(2)),
        Err(AppError::Conversion(ConversionError::InvalidLatticeInput(_)))
    ));
    assert!(matches!(
        app::lattice_from_args(Some(&[3.0, 3.0][..]), Some(90.0), Some(2)),
        Err(AppError::Conversion(ConversionError::InvalidLatticeInput(_)))
    ));
}

#[test]
fn batch_uses_array_path() {
    let cfg = Config::default();
    let mut out = Vec::new();
    app::run_batch(&cfg, "T", "G", "1 0.01\n-3\n", &mut out).expect("batch");
    assert_eq!(String::from_utf8(out).expect("utf8"), "1.00000e4\n100.00000\n-3.00000e4\n");

    let mut out = Vec::new();
    assert!(matches!(
        app::run_batch(&cfg, "T", "G", "1 two", &mut out),
        Err(AppError::Input(_))
    ));
    assert!(matches!(
        app::run_batch(&cfg, "muB/fu", "T", "1", &mut out),
        Err(AppError::Conversion(ConversionError::UnsupportedConversion { .. }))
    ));
}

#[test]
fn display_options_switch_notation() {
    let opts = DisplayOptions::default();
    assert_eq!(opts.format_value(0.0), "0.00000");
    assert_eq!(opts.format_value(0.5), "0.50000");
    assert_eq!(opts.format_value(-1000.0), "-1000.00000");
    assert_eq!(opts.format_value(1e-4), "1.00000e-4");
    assert_eq!(opts.format_volume(3.6e-29), "3.600e-29");
}

#[test]
fn config_from_toml_fills_defaults() {
    let cfg = Config::from_toml("language = \"ko\"\n[display]\ndecimals = 3\n").expect("config");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.display.decimals, 3);
    assert_eq!(cfg.display.fixed_min, 1e-3);
    assert_eq!(Config::from_toml("").expect("empty"), Config::default());

    let text = Config::default().to_toml().expect("serialize");
    assert_eq!(Config::from_toml(&text).expect("reparse"), Config::default());
}

#[test]
fn config_errors() {
    assert!(matches!(Config::from_toml("language = ["), Err(ConfigError::Serde(_))));
    assert!(matches!(
        config::load(Some(std::path::Path::new("does/not/exist.toml"))),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn batch_input_reads_file() {
    let path = std::env::temp_dir().join(format!("magnet_units_batch_{}.txt", std::process::id()));
    std::fs::write(&path, "1 2\n3\n").expect("write batch file");
    let text = app::read_batch_input(Some(&path)).expect("read batch file");
    std::fs::remove_file(&path).ok();
    assert_eq!(text, "1 2\n3\n");

    let cfg = Config::default();
    let mut out = Vec::new();
    app::run_batch(&cfg, "Oe", "A/m", &text, &mut out).expect("batch");
    assert_eq!(String::from_utf8(out).expect("utf8").lines().count(), 3);

    assert!(matches!(
        app::read_batch_input(Some(std::path::Path::new("does/not/exist.txt"))),
        Err(AppError::Io(_))
    ));
}

#[test]
fn show_config_prints_effective_toml() {
    let cfg = Config::from_toml("language = \"en\"\n[display]\ndecimals = 2\n").expect("config");
    let mut out = Vec::new();
    app::run_show_config(&cfg, &mut out).expect("show config");
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("language = \"en\""), "{text}");
    assert!(text.contains("decimals = 2"), "{text}");
    assert_eq!(Config::from_toml(&text).expect("reparse"), cfg);
}
