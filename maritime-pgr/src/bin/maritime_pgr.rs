use clap::Parser;
use maritime_pgr::app::PgrApp;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let args = PgrApp::parse();
    match args.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("maritime-pgr failed: {e}");
            println!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
