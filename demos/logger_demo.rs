use log::LevelFilter;
use taglog::{args, BuildConfig, Logger};

struct Downloader;

fn main() -> taglog::Result<()> {
    // Everything goes through the log facade; env_logger displays it.
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Trace)
        .init();

    let net = Logger::new("DEMO", "Net");
    net.info("Connected to %s on port %d", &args!["host1", 8080])?;
    net.warn("latency %f ms", &args![12.5])?;

    // Secondary tag taken from a type's short name
    let dl = Logger::for_type::<Downloader>("DEMO");
    dl.debug("fetched %d of %d chunks", &args![3, 16])?;

    // A release config silences every level
    let silent = Logger::with_config("DEMO", Some("Quiet"), &BuildConfig::new(false));
    silent.error("never shown", &args![])?;

    let cause = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
    net.error_with("download of %s failed", &args!["chunk-7"], &cause)?;

    Ok(())
}
