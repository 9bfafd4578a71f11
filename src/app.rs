// src/app.rs

use std::time::Instant;

use winit::{event::WindowEvent, window::Window};

use raycast_light::demo_scene;
use raycast_light::engine_lib::{Color, DrawCommand, PointerController, RayCastMap};

use crate::rendering_lib::{FrameBatch, Renderer, WGSL_SHADER_SOURCE};
use crate::ui::build_ui;

const FALLBACK_CLEAR: Color = [0.05, 0.05, 0.1, 1.0];

fn to_color32(c: Color) -> egui::Color32 {
    let [r, g, b, a] = c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn to_wgpu_color(c: Color) -> wgpu::Color {
    wgpu::Color { r: c[0] as f64, g: c[1] as f64, b: c[2] as f64, a: c[3] as f64 }
}

/// Paints the frame's text commands on egui's background layer, above the scene pass.
fn paint_texts(ctx: &egui::Context, texts: &[DrawCommand]) {
    let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::Background, egui::Id::new("frame_text")));
    for command in texts {
        if let DrawCommand::Text { position, text, size, fill, stroke } = command {
            let pos = egui::pos2(position.x as f32, position.y as f32);
            let font = egui::FontId::proportional(*size);
            if let Some(stroke) = stroke {
                for offset in [egui::vec2(-1.0, 0.0), egui::vec2(1.0, 0.0), egui::vec2(0.0, -1.0), egui::vec2(0.0, 1.0)] {
                    painter.text(pos + offset, egui::Align2::LEFT_BOTTOM, text, font.clone(), to_color32(*stroke));
                }
            }
            painter.text(pos, egui::Align2::LEFT_BOTTOM, text, font, to_color32(*fill));
        }
    }
}

pub struct RayCastApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    scale_factor: f64,
    renderer: Renderer,
    batch: FrameBatch,
    map: RayCastMap,
    pointer: PointerController,
    started: Instant,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl RayCastApp {
    pub async fn new(window: std::sync::Arc<Window>) -> Result<Self, String> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| format!("surface creation failed: {}", e))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| "no compatible GPU adapter".to_string())?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| format!("device request failed: {}", e))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| "surface reports no formats".to_string())?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("surface configured: {}x{} {:?}", config.width, config.height, surface_format);

        let logical = size.to_logical::<f32>(scale_factor);
        let renderer = Renderer::new(&device, config.format, WGSL_SHADER_SOURCE, logical.width, logical.height);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(scale_factor as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, config.format, None, 1);

        let scene = demo_scene::create_sample_scene(&mut rand::thread_rng());
        let map = RayCastMap::new(scene);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            scale_factor,
            renderer,
            batch: FrameBatch::default(),
            map,
            pointer: PointerController::new(scale_factor),
            started: Instant::now(),
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.size
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        let frame = self.map.tick(self.started.elapsed());
        self.batch.build(frame);
        let clear_color = frame.clear_color().unwrap_or(FALLBACK_CLEAR);
        let texts: Vec<DrawCommand> = frame.texts().cloned().collect();

        let logical = self.size.to_logical::<f32>(self.scale_factor);
        self.renderer.render_batch(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            &self.batch,
            logical.width,
            logical.height,
            to_wgpu_color(clear_color),
        );

        let raw_input = self.egui_state.take_egui_input(window);
        let ctx = self.egui_ctx.clone();
        let map = &mut self.map;
        let full_output = ctx.run(raw_input, |ctx| {
            paint_texts(ctx, &texts);
            build_ui(ctx, map);
        });
        self.egui_state.handle_platform_output(window, full_output.platform_output);
        let tris = self.egui_ctx.tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(&self.device, &self.queue, &mut encoder, &tris, &screen_descriptor);
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            self.egui_renderer.render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(tex_id);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();
        Ok(())
    }

    /// Returns true when the event was consumed by the toolbar.
    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        if let WindowEvent::ScaleFactorChanged { scale_factor, .. } = event {
            self.scale_factor = *scale_factor;
        }
        let consumed = self.egui_state.on_window_event(window, event).consumed;
        // the light keeps following the cursor even over the toolbar
        if let Some(origin) = self.pointer.handle_window_event(event) {
            self.map.set_origin(origin);
        }
        consumed
    }
}
