use std::io::Write;

/// Install the stderr logger. `RUST_LOG`, when set, wins over `verbosity`.
pub fn init(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let installed = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}",
                record.level().as_str().to_ascii_lowercase(),
                record.args()
            )
        })
        .try_init();
    if let Err(e) = installed {
        log::debug!("Keeping the existing logger: {e}");
    }
}
