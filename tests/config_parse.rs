use chapter_router::config::Config;
use std::path::Path;

#[test]
fn parse_example_config() {
    let raw = include_str!("../chapter-router.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.llm.model, "llama-3.1-8b-instant");
    assert_eq!(cfg.split.start_page, 419);
    assert_eq!(cfg.split.end_page, 479);
    assert_eq!(cfg.split.output_pdf, "chapter_11.pdf");
    assert!(!cfg.paths.index_pdf.is_empty());
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: Config = toml::from_str("[llm]\nbase_url = \"http://x\"\nmodel = \"m\"\ntemperature = 0.1\nmax_tokens = 10\napi_key_env = \"K\"\ntimeout_seconds = 5\n")
        .expect("parse TOML");
    assert_eq!(cfg.llm.model, "m");
    assert_eq!(cfg.ask.question, "What is metabolism?");
    assert_eq!(cfg.llm.endpoint(), "http://x/chat/completions");
    assert!(cfg.global.print_summary);
}

#[test]
fn relative_index_is_anchored_at_binary_dir() {
    let cfg = Config::default();
    let base = Path::new("/opt/chapter-router/bin");
    assert_eq!(
        cfg.paths.index_pdf_path(base),
        base.join("book").join("index.pdf")
    );
}

#[test]
fn absolute_index_is_kept() {
    let mut cfg = Config::default();
    let abs = std::env::temp_dir().join("index.pdf");
    cfg.paths.index_pdf = abs.display().to_string();
    assert_eq!(cfg.paths.index_pdf_path(Path::new("/elsewhere")), abs);
}
