// src/main.rs

pub mod app;
pub mod ui;
pub mod rendering_lib;

use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};
use app::RayCastApp;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn run() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            // a second init only means a logger is already installed
            let _ = console_log::init_with_level(log::Level::Warn);
        } else {
            env_logger::init();
        }
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("could not create event loop: {}", e);
            return;
        }
    };
    let window = match WindowBuilder::new()
        .with_title("Ray Cast")
        .with_inner_size(winit::dpi::LogicalSize::new(1024, 768))
        .build(&event_loop)
    {
        Ok(window) => std::sync::Arc::new(window),
        Err(e) => {
            log::error!("could not create window: {}", e);
            return;
        }
    };

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        let attached = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("wasm-viewport")?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            });
        if attached.is_none() {
            log::error!("couldn't append canvas to document body");
            return;
        }
    }

    let mut app_state = match RayCastApp::new(window.clone()).await {
        Ok(app) => app,
        Err(e) => {
            log::error!("startup failed: {}", e);
            return;
        }
    };
    log::info!("ray cast window ready");

    let result = event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                if !app_state.handle_window_event(event, &window) {
                    match event {
                        WindowEvent::CloseRequested => {
                            log::info!("close requested");
                            target.exit();
                        }
                        WindowEvent::Resized(physical_size) => {
                            app_state.resize(*physical_size);
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                match app_state.render(&window) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app_state.resize(app_state.get_size());
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        target.exit();
                    }
                    Err(e) => log::warn!("surface error: {:?}", e),
                }

                if !target.exiting() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    });
    if let Err(e) = result {
        log::error!("event loop ended with error: {}", e);
    }
}

#[tokio::main]
async fn main() {
    run().await;
}
