/// Scripted color wheel demo entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use colorwheel::AppConfig;

    // An explicit config path wins over the per-user config file
    let config = match std::env::args_os().nth(1) {
        Some(path) => match AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AppConfig::load_from_default_path().unwrap_or_default(),
    };

    env_logger::builder()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();
    log::debug!("Using configuration: {:?}", config);

    match colorwheel::demo::run(&config) {
        Ok(paths) => {
            for path in paths {
                println!("{}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// The demo writes files, which the browser target cannot do
#[cfg(target_arch = "wasm32")]
fn main() {}
