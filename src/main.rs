use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use window_context::cli::Cli;
use window_context::{WindowConfig, WindowContext, WinitPlatform};

struct App {
    config: WindowConfig,
    list_resolutions: bool,
    context: Option<WindowContext<WinitPlatform>>,
    /// Index of the last resolution picked with `R`
    resolution_index: usize,
    /// First fatal error, returned from main after the loop exits
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: WindowConfig, list_resolutions: bool) -> Self {
        Self {
            config,
            list_resolutions,
            context: None,
            resolution_index: 0,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn create_context(&self, event_loop: &ActiveEventLoop) -> Result<WindowContext<WinitPlatform>> {
        let platform =
            WinitPlatform::create(event_loop, &self.config).context("failed to create window")?;
        let context = WindowContext::new(platform, &self.config)
            .context("failed to apply startup window state")?;
        context.log_platform_info();
        Ok(context)
    }

    fn print_resolutions(&self, context: &WindowContext<WinitPlatform>) -> Result<()> {
        let resolutions = context.available_resolutions(self.config.aspect_ratio.as_deref())?;
        if resolutions.is_empty() {
            println!("No display modes reported");
        }
        for resolution in resolutions {
            println!("{resolution}");
        }
        Ok(())
    }

    fn cycle_resolution(&mut self) {
        let Some(context) = self.context.as_mut() else {
            return;
        };
        let resolutions = match context.available_resolutions(self.config.aspect_ratio.as_deref())
        {
            Ok(resolutions) if !resolutions.is_empty() => resolutions,
            Ok(_) => {
                log::warn!("No resolutions to cycle through");
                return;
            }
            Err(err) => {
                log::warn!("{err}");
                return;
            }
        };

        self.resolution_index = (self.resolution_index + 1) % resolutions.len();
        if let Err(err) = context.set_resolution(&resolutions[self.resolution_index]) {
            log::warn!("{err}");
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let PhysicalKey::Code(keycode) = event.physical_key else {
            return;
        };

        match keycode {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::KeyR => self.cycle_resolution(),
            KeyCode::F11 | KeyCode::Tab => {
                let Some(context) = self.context.as_mut() else {
                    return;
                };
                let result = if keycode == KeyCode::F11 {
                    context.toggle_fullscreen()
                } else {
                    context.toggle_cursor_capture()
                };
                if let Err(err) = result {
                    log::warn!("{err}");
                }
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.context.is_some() {
            return;
        }

        let context = match self.create_context(event_loop) {
            Ok(context) => context,
            Err(err) => return self.fail(event_loop, err),
        };

        if self.list_resolutions {
            if let Err(err) = self.print_resolutions(&context) {
                return self.fail(event_loop, err);
            }
            event_loop.exit();
            return;
        }

        context.platform().request_redraw();
        self.context = Some(context);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(context) = self.context.as_mut() {
            context.handle_window_event(&event);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(context) = &self.context {
                    if let (Some(normalized), Some(corrected)) =
                        (context.mouse_normalized(), context.mouse_aspect_corrected())
                    {
                        log::info!(
                            "Click at normalized ({:.3}, {:.3}), aspect corrected ({:.3}, {:.3})",
                            normalized.x,
                            normalized.y,
                            corrected.x,
                            corrected.y
                        );
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(context) = self.context.as_mut() {
                    context.input_mut().end_frame();
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => WindowConfig::from_file(path)?,
        None => WindowConfig::default(),
    };
    let config = cli.apply(config);
    log::debug!("Window config: {config:?}");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, cli.list_resolutions);

    println!("Controls: F11 fullscreen, Tab capture cursor, R next resolution, Escape quit");
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
