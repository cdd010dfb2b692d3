mod graphics;
mod input;
mod palette;

use std::time::{Duration, Instant};

use bitedit::{EditorConfig, EditorSession, PointerOutcome};
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::graphics::GraphicsRenderer;
use crate::input::{InputAction, InputHandler};

const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 24);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => EditorConfig::load(&path)?,
        None => EditorConfig::default(),
    };
    log::info!(
        "Starting with a {0}x{0} grid in a {1}px window, border {2}",
        config.cells_side,
        config.window,
        config.border
    );

    let (canvas_width, canvas_height) = config.canvas_size();
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("BitEdit")
        .with_inner_size(winit::dpi::LogicalSize::new(canvas_width, canvas_height))
        .with_resizable(true)
        .build(&event_loop)?;

    let mut graphics = GraphicsRenderer::new(&window, &config)?;
    let mut session = EditorSession::from_config(&config)?;
    let input_handler = InputHandler::new();

    let mut cursor = PhysicalPosition::new(0.0, 0.0);
    let mut next_frame = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(next_frame);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    graphics.resize(size.width, size.height);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = position;
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    let Some((x, y)) = graphics.window_to_canvas(cursor) else {
                        return;
                    };
                    match session.pointer_down(x, y) {
                        Ok(PointerOutcome::Applied { .. }) => {}
                        Ok(PointerOutcome::OutsideGrid) => {
                            if let Some(tool) = graphics.palette().tool_at(x, y) {
                                session.set_tool(tool);
                            }
                        }
                        Err(err) => log::error!("Tool failed at ({}, {}): {}", x, y, err),
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => match input_handler.handle_keyboard_input(&input) {
                    InputAction::SelectTool(tool) => session.set_tool(tool),
                    InputAction::Quit => *control_flow = ControlFlow::Exit,
                    InputAction::None => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                if now >= next_frame {
                    graphics.render(&session);
                    if let Err(err) = graphics.present() {
                        log::error!("Render error: {}", err);
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    next_frame = (next_frame + FRAME_TIME).max(now);
                    *control_flow = ControlFlow::WaitUntil(next_frame);
                }
            }
            _ => {}
        }
    });
}
