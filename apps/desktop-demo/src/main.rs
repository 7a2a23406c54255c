use std::process::ExitCode;

use animate_app::{AnimateAppBuilder, DemoKind};

fn main() -> ExitCode {
    env_logger::init();

    // An optional first argument picks the demo; the transition demo otherwise.
    let demo = match std::env::args().nth(1) {
        Some(name) => match name.parse::<DemoKind>() {
            Ok(demo) => demo,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => DemoKind::default(),
    };

    println!("=== Animate State ===");
    println!("Showing the {demo} demo. Click the button to toggle its animation.");
    println!("Press 'D' to dump debug info about what's on screen.");
    println!();

    match AnimateAppBuilder::new().demo(demo).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("desktop-demo: {err}");
            ExitCode::FAILURE
        }
    }
}
