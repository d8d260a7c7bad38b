//! Headless slider driver.
//!
//! Runs a sequence of commands against an in-memory carousel in real time
//! and logs every transition:
//!
//! ```text
//! slider [--slides N] [OPTIONS.toml] COMMAND...
//!
//! COMMAND: next | prev | select:N
//! ```

use std::path::Path;
use std::time::Duration;

use slider::{
    FrameOutcome, MemorySurface, Slider, SliderCommand, SliderOptions,
};
use web_time::Instant;

const FRAME: Duration = Duration::from_millis(16);
const DEFAULT_SLIDES: usize = 4;

struct Args {
    slides: usize,
    options: SliderOptions,
    commands: Vec<SliderCommand>,
}

fn parse_command(arg: &str) -> Result<SliderCommand, String> {
    match arg {
        "next" => Ok(SliderCommand::Next),
        "prev" => Ok(SliderCommand::Prev),
        _ => {
            let index = arg
                .strip_prefix("select:")
                .ok_or_else(|| format!("unknown command: {arg}"))?;
            index
                .parse()
                .map(SliderCommand::Select)
                .map_err(|e| format!("bad slide index {index:?}: {e}"))
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut slides = DEFAULT_SLIDES;
    let mut options = SliderOptions {
        navigation_enabled: true,
        ..SliderOptions::default()
    };
    let mut commands = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--slides" {
            let count = args
                .next()
                .ok_or_else(|| "--slides needs a count".to_owned())?;
            slides = count
                .parse()
                .map_err(|e| format!("bad slide count {count:?}: {e}"))?;
        } else if Path::new(&arg)
            .extension()
            .is_some_and(|ext| ext == "toml")
        {
            options = SliderOptions::load(Path::new(&arg))
                .map_err(|e| format!("{arg}: {e}"))?;
        } else {
            commands.push(parse_command(&arg)?);
        }
    }

    if commands.is_empty() {
        return Err("no commands given".to_owned());
    }
    Ok(Args {
        slides,
        options,
        commands,
    })
}

fn run(args: Args) -> Result<(), slider::SliderError> {
    let surface = MemorySurface::numbered(args.slides);
    let mut slider = Slider::with_tween(args.options, surface);
    slider.init()?;

    for command in args.commands {
        let outcome = slider.execute(command)?;
        log::info!("{command:?}: {outcome:?}");

        while slider.in_animation() {
            std::thread::sleep(FRAME);
            match slider.tick(Instant::now())? {
                FrameOutcome::Progress(progress) => {
                    log::debug!("progress {progress:.1}");
                }
                FrameOutcome::Stepped { active } => {
                    log::info!("stepped to slide {active}");
                }
                FrameOutcome::Settled { active } => {
                    log::info!("settled on slide {active}");
                }
                FrameOutcome::Idle | FrameOutcome::Waiting => {}
            }
        }
    }

    log::info!(
        "active slide {}, order {:?}",
        slider.active_index(),
        slider.surface().order()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!(
                "Usage: slider [--slides N] [OPTIONS.toml] next|prev|select:N..."
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
