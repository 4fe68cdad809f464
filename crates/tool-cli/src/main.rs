mod args;
mod registry;

use log::info;
use tool_domain::ClassRegistry;
use tool_persistence::StorageConfig;
use tracing_subscriber::{fmt, EnvFilter};

use args::{Command, USAGE};
use registry::{dispatch, tool_infos, CliError};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).with_level(true).init();
}

fn main() {
    init_logging();
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let command = match args::parse(&argv) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[toolflow] {e}");
            eprintln!("{USAGE}");
            std::process::exit(CliError::from(e).exit_code());
        }
    };

    let run = match command {
        Command::Help => {
            println!("{USAGE}");
            return;
        }
        Command::List => {
            for tool in tool_infos() {
                println!("{tool}");
                for signature in &tool.signatures {
                    println!("    {signature}");
                }
            }
            return;
        }
        Command::Run(run) => run,
    };

    // catálogo de clases: una sola vez, antes de cargar nada
    let classes = ClassRegistry::with_known_classes();
    let storage = StorageConfig::from_env();

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("[toolflow] runtime error: {e}");
            std::process::exit(5);
        }
    };
    match runtime.block_on(dispatch(&run, &storage, &classes)) {
        Ok(report) => {
            for path in report.written() {
                println!("{}", path.display());
            }
            info!("{}: {} instance(s), {} file(s) in {:?}",
                  report.tool,
                  report.instances,
                  report.written().count(),
                  report.total_elapsed());
        }
        Err(e) => {
            eprintln!("[toolflow] {e}");
            std::process::exit(e.exit_code());
        }
    }
}
