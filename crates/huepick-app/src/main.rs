//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Huepick");

    let result = huepick_app::AppConfig::from_env().and_then(huepick_app::PlatformApp::run);
    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("huepick: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
