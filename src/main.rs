use tracing_subscriber::EnvFilter;
use typesort::cli::parse_args;
use typesort::engine::clean_and_sort;

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            // Bad arguments are reported, not treated as a failure
            println!("{}", err.message());
            return Ok(());
        }
    };

    clean_and_sort(&args.input, &args.output, &args.config())?;
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
