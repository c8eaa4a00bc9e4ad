use clap::error::ErrorKind;
use clap::Parser;
use random_standup::cli::{execute, get_log_level, Cli, RunOptions};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            // Usage goes to stderr so stdout only ever carries a standup
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                eprint!("{}", e.render());
                std::process::exit(0);
            }
            _ => e.exit(),
        },
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(get_log_level(cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("random-standup started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let options = RunOptions::from(&cli);
    let stdout = std::io::stdout();
    if let Err(e) = execute(&options, &mut stdout.lock()) {
        debug!("Run failed: {e:?}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
