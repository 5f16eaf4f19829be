//! Core application state and lifecycle.

use crate::config::AppConfig;
use crate::event_handler;
use crate::shortcuts::ShortcutRegistry;
use crate::ui::{UiAction, UiState, render_ui, to_color32};
use kurbo::Size;
use shapepad_core::{Controller, InputState};
use shapepad_render::{RenderContext, Renderer, RendererError, VelloRenderer};
use std::sync::Arc;
use thiserror::Error;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

/// Fatal application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error(transparent)]
    Renderer(#[from] RendererError),
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    shape_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion.
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // State
    controller: Controller,
    input: InputState,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// First fatal error, reported once the event loop exits.
    error: Option<AppError>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            error: None,
        }
    }

    /// Run the application until the window closes.
    pub fn run(config: AppConfig) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        let mut app = App::with_config(config);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{error}");
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn create_state(&mut self, event_loop: &ActiveEventLoop) -> Result<AppState, AppError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Window created, surface size {width}x{height}");

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(e.to_string()))?;

        let state = init_state(render_cx, window, surface, &self.config)?;
        Ok(state)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build renderers and UI state once the surface exists.
fn init_state(
    render_cx: &vello::util::RenderContext,
    window: Arc<Window>,
    surface: RenderSurface<'static>,
    config: &AppConfig,
) -> Result<AppState, RendererError> {
    let device = &render_cx.devices[surface.dev_id].device;

    let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
        .map_err(|e| RendererError::InitFailed(e.to_string()))?;

    // Vello renders to Rgba8Unorm; the surface may be Bgra8Unorm.
    let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

    let egui_ctx = egui::Context::default();
    let egui_state = egui_winit::State::new(
        egui_ctx.clone(),
        egui::ViewportId::ROOT,
        &window,
        Some(window.scale_factor() as f32),
        None,
        None,
    );
    let egui_renderer = egui_wgpu::Renderer::new(
        device,
        surface.config.format,
        egui_wgpu::RendererOptions::default(),
    );

    let controller = Controller::new(config.initial_color);

    log::info!(
        "Shapepad initialized - {}x{}",
        surface.config.width,
        surface.config.height
    );
    log::info!("Keyboard shortcuts:");
    ShortcutRegistry::log_all();

    window.request_redraw();

    Ok(AppState {
        window,
        surface,
        vello_renderer,
        shape_renderer: VelloRenderer::new(),
        texture_blitter,
        egui_ctx,
        egui_state,
        egui_renderer,
        ui_state: UiState::default(),
        controller,
        input: InputState::new(),
    })
}

fn apply_action(controller: &mut Controller, action: UiAction) {
    match action {
        UiAction::SetTool(tool) => controller.set_tool(tool),
        UiAction::SetColor(color) => controller.set_picker_color(color),
        UiAction::DeleteSelected => {
            controller.delete_selected();
        }
        UiAction::CloneSelected => {
            controller.clone_selected();
        }
        UiAction::Cancel => controller.cancel(),
    }
}

fn sync_ui_state(ui_state: &mut UiState, controller: &Controller) {
    ui_state.current_tool = controller.current_tool();
    ui_state.fill_color = to_color32(controller.picker_color());
    ui_state.has_selection = controller.selection().is_some();
    ui_state.shape_count = controller.canvas.document.len();
}

/// Run egui, rebuild the scene and present one frame.
fn redraw(
    state: &mut AppState,
    render_cx: &vello::util::RenderContext,
    config: &AppConfig,
) -> Result<(), RendererError> {
    sync_ui_state(&mut state.ui_state, &state.controller);

    let egui_input = state.egui_state.take_egui_input(&state.window);
    let mut action = None;
    let egui_output = state.egui_ctx.run(egui_input, |ctx| {
        action = render_ui(ctx, &mut state.ui_state);
    });
    if let Some(action) = action {
        apply_action(&mut state.controller, action);
    }
    state
        .egui_state
        .handle_platform_output(&state.window, egui_output.platform_output);
    let egui_primitives = state
        .egui_ctx
        .tessellate(egui_output.shapes, egui_output.pixels_per_point);

    let width = state.surface.config.width;
    let height = state.surface.config.height;
    let scale_factor = state.window.scale_factor();

    let ctx = RenderContext::new(
        &state.controller.canvas,
        Size::new(width as f64 / scale_factor, height as f64 / scale_factor),
    )
    .with_scale_factor(scale_factor)
    .with_background(config.background_color)
    .with_selection_color(config.selection_color)
    .with_stroke_width(config.stroke_width)
    .with_cursor_icon(state.controller.cursor_icon());
    state.shape_renderer.build_scene(&ctx);
    let scene = state.shape_renderer.take_scene();

    let device_handle = &render_cx.devices[state.surface.dev_id];
    let device = &device_handle.device;
    let queue = &device_handle.queue;

    let surface_texture = match state.surface.surface.get_current_texture() {
        Ok(t) => t,
        Err(e) => {
            log::warn!("Failed to get surface texture: {e:?}");
            return Ok(());
        }
    };

    let params = RenderParams {
        base_color: config.background_color,
        width,
        height,
        antialiasing_method: AaConfig::Area,
    };

    // Vello's compute shaders need a storage-bindable Rgba8Unorm target.
    let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
        label: Some("vello render texture"),
        size: vello::wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: vello::wgpu::TextureDimension::D2,
        format: vello::wgpu::TextureFormat::Rgba8Unorm,
        usage: vello::wgpu::TextureUsages::STORAGE_BINDING
            | vello::wgpu::TextureUsages::COPY_SRC
            | vello::wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let render_texture_view =
        render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

    state
        .vello_renderer
        .render_to_texture(device, queue, &scene, &render_texture_view, &params)
        .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

    let surface_view = surface_texture
        .texture
        .create_view(&vello::wgpu::TextureViewDescriptor::default());

    {
        let mut blit_encoder =
            device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                label: Some("blit encoder"),
            });
        state.texture_blitter.copy(
            device,
            &mut blit_encoder,
            &render_texture_view,
            &surface_view,
        );
        queue.submit(std::iter::once(blit_encoder.finish()));
    }

    for (id, image_delta) in &egui_output.textures_delta.set {
        state
            .egui_renderer
            .update_texture(device, queue, *id, image_delta);
    }

    let screen_descriptor = egui_wgpu::ScreenDescriptor {
        size_in_pixels: [width, height],
        pixels_per_point: egui_output.pixels_per_point,
    };

    {
        let mut egui_encoder =
            device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                label: Some("egui encoder"),
            });
        state.egui_renderer.update_buffers(
            device,
            queue,
            &mut egui_encoder,
            &egui_primitives,
            &screen_descriptor,
        );

        let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
            label: Some("egui render pass"),
            color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                view: &surface_view,
                resolve_target: None,
                ops: vello::wgpu::Operations {
                    load: vello::wgpu::LoadOp::Load, // Keep Vello content
                    store: vello::wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        // egui-wgpu wants a 'static render pass
        let mut render_pass = render_pass.forget_lifetime();
        state
            .egui_renderer
            .render(&mut render_pass, &egui_primitives, &screen_descriptor);
        drop(render_pass);

        queue.submit(std::iter::once(egui_encoder.finish()));
    }

    for id in &egui_output.textures_delta.free {
        state.egui_renderer.free_texture(id);
    }
    surface_texture.present();

    let egui_needs_repaint = egui_output
        .viewport_output
        .get(&egui::ViewportId::ROOT)
        .is_some_and(|v| v.repaint_delay.is_zero());
    if egui_needs_repaint || state.controller.take_repaint_request() {
        state.window.request_redraw();
    }
    Ok(())
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");
        match self.create_state(event_loop) {
            Ok(state) => self.state = Some(state),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }
        let egui_wants_pointer = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input();
        let egui_wants_keyboard = state.egui_ctx.wants_keyboard_input();

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                if let Err(e) = redraw(state, render_cx, &self.config) {
                    log::error!("Failed to render: {e}");
                }
            }

            WindowEvent::CursorEntered { .. } => {
                let event = state.input.pointer_entered();
                state.controller.handle_pointer_event(event);
            }

            WindowEvent::CursorLeft { .. } => {
                let event = state.input.pointer_left();
                state.controller.handle_pointer_event(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let point = event_handler::logical_point(position, state.window.scale_factor());
                let event = state.input.pointer_moved(point);
                state.controller.handle_pointer_event(event);
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let Some(button) = event_handler::mouse_button(button) else {
                    return;
                };
                match btn_state {
                    ElementState::Pressed => {
                        // Presses on the toolbar belong to egui
                        if egui_wants_pointer {
                            return;
                        }
                        let event = state.input.pointer_down(button);
                        state.controller.handle_pointer_event(event);
                    }
                    ElementState::Released => {
                        // Releases finish gestures that started on the canvas
                        if let Some(event) = state.input.pointer_up(button) {
                            state.controller.handle_pointer_event(event);
                        }
                    }
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                state
                    .input
                    .set_modifiers(event_handler::modifiers(modifiers.state()));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if egui_wants_keyboard || event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let Some(key) = event_handler::key_name(&event.logical_key) else {
                    return;
                };
                if let Some(action) = ShortcutRegistry::action_for(&key, state.input.modifiers) {
                    log::debug!("Shortcut {key} -> {action:?}");
                    apply_action(&mut state.controller, action);
                }
            }

            _ => {}
        }

        if state.controller.take_repaint_request() {
            state.window.request_redraw();
        }
    }
}
