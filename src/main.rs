//! Domino Cascade entry point
//!
//! Browser builds run the render loop on a canvas; native builds run the
//! same simulation headless and log the cascade.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use domino_cascade::Settings;
    use domino_cascade::renderer::{Camera, RenderState};
    use domino_cascade::sim::{DominoState, LoopPhase, TickInput, tick};

    /// Demo instance holding all state
    struct Demo {
        state: DominoState,
        render_state: Option<RenderState>,
        camera: Camera,
        input: TickInput,
        max_pixel_ratio: f64,
    }

    impl Demo {
        fn new(settings: &Settings, width: u32, height: u32) -> Self {
            Self {
                state: DominoState::new(settings),
                render_state: None,
                camera: Camera::from_settings(settings, width, height),
                input: TickInput::default(),
                max_pixel_ratio: settings.max_pixel_ratio,
            }
        }

        /// One frame: tick once, then draw
        fn frame(&mut self) {
            let input = self.input.clone();
            tick(&mut self.state, &input);

            // Clear one-shot inputs after processing
            self.input.start = false;

            self.render();
        }

        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state.scene, &self.camera) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.camera.resize(width, height);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }
    }

    /// Backing-store size for the canvas, pixel ratio capped
    fn canvas_size(canvas: &HtmlCanvasElement, max_pixel_ratio: f64) -> (u32, u32) {
        let window = web_sys::window().expect("no window");
        let dpr = window.device_pixel_ratio().min(max_pixel_ratio);
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        (width.max(1), height.max(1))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Domino Cascade starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        // Write back so the stored copy lists every field
        settings.save();

        let (width, height) = canvas_size(&canvas, settings.max_pixel_ratio);
        canvas.set_width(width);
        canvas.set_height(height);

        let demo = Rc::new(RefCell::new(Demo::new(&settings, width, height)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        demo.borrow_mut().render_state = Some(render_state);

        setup_start_handlers(demo.clone());
        setup_resize_handler(&canvas, demo.clone());

        // Start frame loop
        request_animation_frame(demo);

        log::info!("Domino Cascade running!");
    }

    fn setup_start_handlers(demo: Rc<RefCell<Demo>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // "start" button
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let demo = demo.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                demo.borrow_mut().input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut d = demo.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" => d.input.start = true,
                    "p" | "P" => {
                        log::info!(
                            "Frame {} ({:?}), toppled {}/{}",
                            d.state.frame,
                            d.state.phase,
                            d.state.toppled_count(),
                            d.state.registry.len()
                        );
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, demo: Rc<RefCell<Demo>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::UiEvent| {
            let mut d = demo.borrow_mut();
            let (width, height) = canvas_size(&canvas, d.max_pixel_ratio);
            canvas.set_width(width);
            canvas.set_height(height);
            d.resize(width, height);
            log::debug!("Resized to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(demo: Rc<RefCell<Demo>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(demo);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(demo: Rc<RefCell<Demo>>) {
        {
            let mut d = demo.borrow_mut();
            let was_idle = d.state.phase == LoopPhase::Idle;
            d.frame();
            if was_idle {
                log::info!("Frame loop running, press start to push the first domino");
            }
        }

        request_animation_frame(demo);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_demo::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use domino_cascade::Settings;
    use domino_cascade::sim::{DominoState, TickInput, tick};

    env_logger::init();
    log::info!("Domino Cascade (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let mut state = DominoState::new(&settings);

    log::info!(
        "Layout: {} entities ({} gate A, {} gate B)",
        state.registry.len(),
        state.layout.gate_a,
        state.layout.gate_b
    );

    // Simulated seconds per frame (zero when physics is off)
    let dt = state.physics.as_ref().map_or(0.0, |p| p.timestep());

    for frame in 0..settings.headless_frames {
        let input = TickInput {
            start: frame == settings.headless_trigger_frame,
        };
        tick(&mut state, &input);

        if state.frame % 60 == 0 {
            log::info!(
                "Frame {} ({:.1}s): toppled {}/{}",
                state.frame,
                state.frame as f32 * dt,
                state.toppled_count(),
                state.registry.len()
            );
        }
    }

    log::info!(
        "Done after {} frames: toppled {}/{}",
        state.frame,
        state.toppled_count(),
        state.registry.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
