//! KFU AI Assistant 主窗口

use std::num::NonZeroU32;
use std::rc::Rc;

use softbuffer::Surface;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use kfu_window::color::BACKGROUND;
use kfu_window::window::{attributes_for_monitor, center_window, MonitorArea};
use kfu_window::{Color, WindowConfig, WINDOW_CONFIG};

struct AssistantWindow {
    config: WindowConfig,
    window: Option<Rc<Window>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
    background: Color,
}

impl AssistantWindow {
    fn new(config: WindowConfig) -> Self {
        Self {
            config,
            window: None,
            surface: None,
            background: BACKGROUND,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), String> {
        // 主显示器；Wayland 下拿不到时取第一个
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next())
            .map(|m| MonitorArea::from_handle(&m));
        if monitor.is_none() {
            println!("⚠️  No monitor info, window position left to the system");
        }

        let attrs = attributes_for_monitor(&self.config, monitor.as_ref());
        let window = Rc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| format!("Failed to create window: {}", e))?,
        );

        if let Some(monitor) = &monitor {
            center_window(&self.config, &window, monitor);
        }

        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| format!("Failed to create softbuffer context: {}", e))?;
        let surface = Surface::new(&context, window.clone())
            .map_err(|e| format!("Failed to create surface: {}", e))?;

        let size = window.inner_size();
        println!("🪟 Window created: {}x{} (physical)", size.width, size.height);

        self.window = Some(window);
        self.surface = Some(surface);
        Ok(())
    }

    fn present(&mut self) -> Result<(), String> {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return Ok(());
        };
        let size = window.inner_size();
        // 最小化时尺寸为 0
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };

        surface.resize(width, height).map_err(|e| e.to_string())?;
        let mut buffer = surface.buffer_mut().map_err(|e| e.to_string())?;
        buffer.fill(self.background.to_pixel());
        buffer.present().map_err(|e| e.to_string())
    }
}

impl ApplicationHandler for AssistantWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            eprintln!("❌ {}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(_) => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.present() {
                    eprintln!("❌ Present failed: {}", e);
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 {}", WINDOW_CONFIG.title);
    println!("{}", WINDOW_CONFIG.to_json()?);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = AssistantWindow::new(WINDOW_CONFIG);
    event_loop.run_app(&mut app)?;
    Ok(())
}
