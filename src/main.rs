use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use transform_pipeline::cli::Cli;
use transform_pipeline::config::SceneConfig;
use transform_pipeline::core::{Button, CameraInputAdapter, ControlFlow, InputState};
use transform_pipeline::frame::{FrameInfo, FrameIterator};
use transform_pipeline::scene::Scene;

/// Stand-in for a window's event pump: walk forward, strafe, sweep the mouse
/// in a slow circle and nudge the scroll wheel, all keyed off the frame number.
fn scripted_input(frame: &FrameInfo, total: usize, input: &mut InputState) {
    let phase = frame.number as f32 / total.max(1) as f32;

    if phase < 0.5 {
        input.press(Button::KeyW);
    } else {
        input.release(Button::KeyW);
        input.press(Button::KeyD);
    }

    let angle = phase * std::f32::consts::TAU;
    input.cursor_moved(960.0 + 200.0 * angle.cos(), 540.0 + 120.0 * angle.sin());

    if frame.number % 30 == 29 {
        input.scrolled(1.0);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let mut scene = Scene::from_config(&config);
    let mut input = InputState::new();
    let mut adapter = CameraInputAdapter::new();

    let frames = if cli.delta > 0.0 {
        FrameIterator::fixed(cli.delta)
    } else {
        FrameIterator::new()
    };

    let mut last_frame = None;
    for frame in frames.take(cli.frames) {
        scripted_input(&frame, cli.frames, &mut input);

        if scene.step(&mut adapter, &input, frame.delta) == ControlFlow::Exit {
            info!("Exit requested at frame {}", frame.number);
            break;
        }
        input.end_frame();

        if frame.number % 60 == 0 {
            debug!(
                "frame {} t={:.2}s camera={} front={}",
                frame.number,
                frame.time,
                scene.camera().position,
                scene.camera().front()
            );
        }
        last_frame = Some(frame);
    }

    let last_frame = last_frame.context("No frames were simulated")?;
    let camera = scene.camera();
    info!(
        "Simulated {} frames ({:.2}s): camera at {}, yaw {:.1}, pitch {:.1}, fov {:.1}",
        last_frame.number + 1,
        last_frame.time,
        camera.position,
        camera.yaw(),
        camera.pitch(),
        camera.zoom()
    );
    debug!("view =\n{}", scene.view_matrix());
    debug!("projection =\n{}", scene.projection_matrix());

    if cli.dump {
        let uniforms = scene.frame_uniforms();
        println!("{}", serde_json::to_string_pretty(&uniforms).context("Failed to serialize frame uniforms")?);
        let lights = scene.light_uniforms();
        if !lights.is_empty() {
            println!("{}", serde_json::to_string_pretty(&lights).context("Failed to serialize light uniforms")?);
        }
    }

    Ok(())
}
