use log::error;
use std::path::Path;
use std::process;

mod error;
mod icon;
mod logging;

/// Icon that gets converted, relative to the working directory
const INPUT_PATH: &str = "128x128@2x.png";

fn main() {
    logging::init_logger();

    if let Err(e) = icon::process(Path::new(INPUT_PATH)) {
        error!("❌ {}", e);
        process::exit(1);
    }

    println!("done.");
}
