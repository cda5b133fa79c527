use env_logger::{Builder, Env};

/// Initializes the global logger.
///
/// Defaults to `info`; `RUST_LOG` overrides the filter.
pub fn init() {
    let env = Env::default().default_filter_or("info");
    let mut builder = Builder::from_env(env);

    // `try_init` 仅在已设置 logger 时失败，重复调用直接忽略
    let _ = builder.try_init();
}
