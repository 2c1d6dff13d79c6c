use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use accordion::constants::*;
use accordion::{Accordion, AccordionOptions, Layout, decode_texture, preload_images, render};

#[derive(Parser)]
#[command(name = "accordion", about = "Accordion slide widget over a preloaded background")]
struct Args {
    /// JSON options file with background_image, slide_data and element
    config: PathBuf,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // --- Load & Validate Options ---
    let options = AccordionOptions::from_path(&args.config)
        .with_context(|| format!("failed to read options from {}", args.config.display()))?;
    let Ok(mut widget) = Accordion::new(options) else {
        // Per-field diagnostics were already logged; nothing is built.
        process::exit(1);
    };

    // --- Preload Images ---
    // All slide backgrounds plus the main background, joined before any
    // slide element exists.
    let preloaded = preload_images(widget.config());
    widget.build_slides(&preloaded);

    // --- Window ---
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Accordion")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Decode Preloaded Images into Textures ---
    let mut slide_textures: Vec<Option<Texture2D>> = Vec::new();
    for ix in 0..widget.slide_count() {
        let texture = preloaded
            .slide(ix)
            .and_then(|loaded| match decode_texture(&mut rl, &thread, loaded) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!("{e}");
                    None
                }
            });
        slide_textures.push(texture);
    }
    let background = preloaded
        .background()
        .and_then(|loaded| match decode_texture(&mut rl, &thread, loaded) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!("{e}");
                None
            }
        });

    // --- Main Loop ---
    while !rl.window_should_close() {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        let mouse = rl.get_mouse_position();

        // Input against the pre-update layout.
        let layout = Layout::compute(widget.slide_count(), widget.selected(), width, height);
        widget.update_hover(layout.title_at(mouse));
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(hit) = widget.hit_at(&layout, mouse) {
                widget.handle_click(hit);
            }
        }
        widget.poll_templates();

        // Draw against the post-update layout.
        let layout = Layout::compute(widget.slide_count(), widget.selected(), width, height);
        let mut d = rl.begin_drawing(&thread);
        render::draw(&mut d, &widget, &layout, background.as_ref(), &slide_textures);
    }

    Ok(())
}
