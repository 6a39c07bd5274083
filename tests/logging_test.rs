use tui_2048::config::Config;
use tui_2048::logging::init_tracing;

#[test]
fn init_tracing_reports_failures() {
    // no log path: nothing to install
    assert!(init_tracing(&Config::default()).is_ok());

    let bad_dir = Config {
        log_path: Some(std::env::temp_dir().join("tui-2048-missing-dir").join("x").join("log")),
        ..Config::default()
    };
    assert!(init_tracing(&bad_dir).is_err());

    let path = std::env::temp_dir().join(format!("tui-2048-test-{}.log", std::process::id()));
    let config = Config {
        log_path: Some(path.clone()),
        ..Config::default()
    };
    assert!(init_tracing(&config).is_ok());

    // a second global subscriber is rejected, not silently dropped
    let err = init_tracing(&config).unwrap_err();
    assert!(err.to_string().contains("tracing subscriber"), "{err}");

    let _ = std::fs::remove_file(path);
}
