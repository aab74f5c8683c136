use clap::Parser;
use wayfarer::app::{AppError, WayfarerApp};

fn main() -> Result<(), AppError> {
    env_logger::init();
    let args = WayfarerApp::parse();
    args.op.run()
}
