use linked_heap::demo::{run_demo, DemoConfig};
use std::env;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [count] [upper_bound] [seed] [--json]
    let config = DemoConfig::from_args(env::args().skip(1));
    log::debug!("demo configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&config, &mut out)?;

    Ok(())
}
