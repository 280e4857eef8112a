use clap::Parser;
use dashpatch::application::{apply_patch, PatchOptions};
use dashpatch::cli::{format_report, Cli};
use dashpatch::domain::DashboardPatch;
use dashpatch::error::PatchError;
use dashpatch::infrastructure::{logging, Config, TargetFile};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PatchError> {
    let config = Config::resolve(cli.root, cli.verbose)?;
    logging::init(config.log_filter());

    let patch = DashboardPatch::fixed();
    let target = TargetFile::discover(&config, &patch)?;

    let options = PatchOptions {
        dry_run: cli.dry_run,
        force: cli.force,
        backup: cli.backup,
    };

    let report = apply_patch(&target, &patch, options)?;
    print!("{}", format_report(&report));
    Ok(())
}
