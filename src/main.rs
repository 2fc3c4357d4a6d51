/// Headless dropdown demo.
///
/// Usage: `select-dropdown-demo [config.json]`. Without a config file the
/// built-in country list is used.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use select_dropdown::{DemoConfig, DemoSession, Event};

    let config = match std::env::args().nth(1) {
        Some(path) => match DemoConfig::load_file(std::path::Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        },
        None => DemoConfig::default(),
    };

    // RUST_LOG overrides the level from the config file
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let mut session = DemoSession::new(&config);
    log::info!("Button: {}", session.button_label());

    let script = [
        Event::ButtonPressed,
        Event::ListLaidOut,
        Event::SearchTextChanged("a".to_string()),
        Event::SelectAllToggled,
        Event::RowPressed { position: 0 },
        Event::ScrollEndReached,
        Event::BackdropPressed,
    ];
    for event in script {
        session.dispatch(event);
    }

    log::info!("Button: {}", session.button_label());
    log::info!("Selection: {:?}", session.selection());
    log::info!("{} messages received", session.history().len());
}

// The demo needs a terminal; nothing to run on the web
#[cfg(target_arch = "wasm32")]
fn main() {}
