use env_logger::Env;
use winit::event_loop::{ControlFlow, EventLoop};

use quantum_culture::app::App;
use quantum_culture::config::SEED_ENV;

/// Optional fixed seed for a replayable session
fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_ENV).ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("Ignoring {}={:?}: {}", SEED_ENV, raw, e);
            None
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    log::info!("Quantum Culture");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(seed_from_env());
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
