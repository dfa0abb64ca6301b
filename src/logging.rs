use env_logger::Env;

/// Set up env_logger on stderr. `RUST_LOG` wins over `default_level`.
pub fn init(default_level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
