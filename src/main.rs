use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::Context;
use clap::Parser;
use signal_hook::consts::{SIGINT, SIGTERM};

use neopixel_pi::logger;
use neopixel_pi::{
    AnimationKind, Animator, Cli, LogWriter, PixelBuf, PixelWriter, SpiWriter, SystemClock,
    build_animation,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let settings = cli.settings().context("invalid configuration")?;
    if cli.color.is_some() && cli.animation != AnimationKind::Solid {
        tracing::warn!(animation = %cli.animation, "--color only applies to the solid animation");
    }

    let writer: Box<dyn PixelWriter> = if cli.dry_run {
        tracing::info!("dry run: frames are logged, not transmitted");
        Box::new(LogWriter::new())
    } else {
        Box::new(
            SpiWriter::open(cli.pin)
                .with_context(|| format!("failed to open pin {}", cli.pin))?,
        )
    };

    let pixels = PixelBuf::new(writer, cli.num_pixels, settings.byte_order)
        .with_brightness(settings.brightness)
        .with_auto_write(true);
    let animation = build_animation(cli.animation, &settings)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&shutdown))
            .context("failed to install signal handler")?;
    }

    let clock = SystemClock::new();
    let mut animator = Animator::new(pixels, animation, &clock);

    tracing::info!(
        pin = %cli.pin,
        pixels = cli.num_pixels,
        byte_order = %settings.byte_order,
        brightness = settings.brightness,
        "starting"
    );
    println!("Running {} animation...", cli.animation);

    animator.run_until(&shutdown, settings.interval())?;

    println!("\nStopping animation...");
    tracing::info!(frames = animator.frames(), "strip cleared");
    Ok(())
}
