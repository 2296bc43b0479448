//! Codewheel entry point
//!
//! Handles platform-specific initialization and runs the frame loop. The
//! loop itself knows nothing about the game: it refreshes the viewport,
//! fires the lifecycle hooks in a fixed order, feeds normalized pointer
//! events in and hands the recorded scene to the GPU.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use codewheel::game::{Interactable, Lifecycle, PointerEvent, Renderable};
    use codewheel::geom::Rect;
    use codewheel::renderer::{RenderState, ScenePainter};
    use codewheel::{GameConfig, LockpickGame, platform};

    /// Application context, passed (shared) into the frame loop and the
    /// event closures
    struct App {
        game: LockpickGame,
        render_state: RenderState,
        painter: ScenePainter,
        canvas: HtmlCanvasElement,
        /// Events gathered between frames, drained once per frame so input
        /// always lands in the same spot of the frame order
        pending_events: Vec<PointerEvent>,
        /// Last touch position, for synthesizing move deltas
        last_touch: Option<Vec2>,
    }

    /// Scale from CSS pixels to the physical pixels the game runs in
    fn pixel_ratio() -> f32 {
        web_sys::window()
            .map(|w| w.device_pixel_ratio() as f32)
            .unwrap_or(1.0)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Codewheel starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the backing store to the physical canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let game = LockpickGame::new(&config, platform::now_ms(), seed);
        log::info!("Game initialized with seed: {}", seed);

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

        let app = Rc::new(RefCell::new(App {
            game,
            render_state,
            painter: ScenePainter::new(),
            canvas,
            pending_events: Vec::new(),
            last_touch: None,
        }));

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Codewheel running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let canvas = app.borrow().canvas.clone();

        // Mouse down - primary button only
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let dpr = pixel_ratio();
                let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32) * dpr;
                app.borrow_mut().pending_events.push(PointerEvent::Down(point));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                app.borrow_mut().pending_events.push(PointerEvent::Up);
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - the browser reports the delta, rebuild the previous
        // position from it
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let dpr = pixel_ratio();
                let to = Vec2::new(event.offset_x() as f32, event.offset_y() as f32) * dpr;
                let delta =
                    Vec2::new(event.movement_x() as f32, event.movement_y() as f32) * dpr;
                app.borrow_mut()
                    .pending_events
                    .push(PointerEvent::Move { from: to - delta, to });
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let point = Vec2::new(
                        touch.client_x() as f32 - rect.left() as f32,
                        touch.client_y() as f32 - rect.top() as f32,
                    ) * pixel_ratio();
                    let mut app = app.borrow_mut();
                    app.last_touch = Some(point);
                    app.pending_events.push(PointerEvent::Down(point));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let to = Vec2::new(
                        touch.client_x() as f32 - rect.left() as f32,
                        touch.client_y() as f32 - rect.top() as f32,
                    ) * pixel_ratio();
                    let mut app = app.borrow_mut();
                    let from = app.last_touch.unwrap_or(to);
                    app.last_touch = Some(to);
                    app.pending_events.push(PointerEvent::Move { from, to });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut app = app.borrow_mut();
                app.last_touch = None;
                app.pending_events.push(PointerEvent::Up);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One full frame: lifecycle hooks in fixed order, with the viewport
    /// refresh, the input drain and the draw in their slots
    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut app_ref = app.borrow_mut();
            let App {
                game,
                render_state,
                painter,
                canvas,
                pending_events,
                ..
            } = &mut *app_ref;

            let now = platform::now_ms();

            game.on_frame_start();

            // The canvas can resize at any time; track it every frame
            let dpr = pixel_ratio();
            let width = (canvas.client_width() as f32 * dpr) as u32;
            let height = (canvas.client_height() as f32 * dpr) as u32;
            if (width, height) != render_state.size && width > 0 && height > 0 {
                canvas.set_width(width);
                canvas.set_height(height);
                render_state.resize(width, height);
            }
            game.set_viewport(Rect::from_size(width as f32, height as f32));
            game.on_frame_initialization(now);

            game.on_pre_events();
            for event in pending_events.drain(..) {
                match event {
                    PointerEvent::Down(point) => game.begin_interaction(point),
                    PointerEvent::Up => game.end_interaction(),
                    PointerEvent::Move { from, to } => game.move_interaction(from, to),
                }
            }

            game.on_pre_render(now);
            game.on_post_render_clear();

            painter.begin_frame();
            game.render(painter, now);

            game.on_pre_render_present();
            match render_state.render(painter.vertices()) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (width, height) = render_state.size;
                    render_state.resize(width, height);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            game.on_post_render_present();

            game.on_frame_end();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;

    use codewheel::game::{Interactable, Lifecycle, Renderable};
    use codewheel::geom::Rect;
    use codewheel::renderer::RecordPainter;
    use codewheel::{GameConfig, LockpickGame, platform};

    env_logger::init();
    log::info!("Codewheel (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the playable game");

    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 600.0;

    let config = GameConfig::load();
    let mut game = LockpickGame::new(&config, platform::now_ms(), 0xC0DE);
    game.set_viewport(Rect::from_size(WIDTH, HEIGHT));
    let mut painter = RecordPainter::default();

    // A short scripted session: spin the wheel, punch in two characters,
    // then clear them again
    let hub = Vec2::new(WIDTH / 2.0, (89.0 + HEIGHT) / 2.0);
    for frame in 0..5u32 {
        let now = platform::now_ms();

        game.on_frame_start();
        game.on_frame_initialization(now);
        game.on_pre_events();

        match frame {
            1 => {
                game.begin_interaction(Vec2::new(400.0, 150.0));
                game.move_interaction(Vec2::new(400.0, 150.0), Vec2::new(650.0, 340.0));
                game.end_interaction();
            }
            2 | 3 => {
                game.begin_interaction(hub);
                game.end_interaction();
            }
            4 => {
                // Delete control on the code row
                game.begin_interaction(Vec2::new(WIDTH - 60.0, 50.0));
                game.end_interaction();
            }
            _ => {}
        }

        game.on_pre_render(now);
        game.on_post_render_clear();

        painter.clear();
        game.render(&mut painter, now);

        game.on_pre_render_present();
        game.on_post_render_present();
        game.on_frame_end();

        println!("frame {frame}: {} draw calls", painter.commands.len());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
