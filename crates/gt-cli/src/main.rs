//! `givetransparent` binary

use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = gt_cli::build_cli().get_matches();
    gt_cli::init_tracing(
        gt_cli::cli::global_flag(&matches, "verbose"),
        gt_cli::cli::global_flag(&matches, "log-json"),
    );

    match gt_cli::run(&matches) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
