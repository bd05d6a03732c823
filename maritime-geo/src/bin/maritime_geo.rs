use clap::Parser;
use maritime_geo::app::GeoApp;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let args = GeoApp::parse();
    match args.op.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("maritime-geo failed: {e}");
            println!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
