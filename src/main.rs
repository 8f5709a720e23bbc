//! Bounce entry point
//!
//! Native builds run the simulation headless on a software canvas; the web
//! build renders into the page's `<canvas id="canvas">` through WebGPU.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use bounce::renderer::{GpuCanvas, RenderState};
    use bounce::{BounceSimulator, Host, Settings};

    type WebHost = Host<GpuCanvas>;

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bounce starting...");

        let settings = Settings::default();
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed size; the page may scale it with CSS
        canvas.set_width(settings.width);
        canvas.set_height(settings.height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, settings.width, settings.height)
            .await
            .expect("Failed to create render state");

        let mut host = Host::new(
            GpuCanvas::new(render_state, settings.background),
            settings.frame_rate,
        );
        host.animate(BounceSimulator::from_settings(&settings));

        request_animation_frame(Rc::new(RefCell::new(host)));

        log::info!("Bounce running!");
    }

    fn request_animation_frame(host: Rc<RefCell<WebHost>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            host.borrow_mut().step();
            request_animation_frame(host);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    web::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce (native) starting...");

    if let Err(e) = run_native() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_native() -> bounce::error::Result<()> {
    use bounce::{BounceSimulator, Host, PixelCanvas, Settings};

    // Loading validates; defaults are always valid
    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    log::info!("Settings: {:?}", settings);
    log::info!("Native mode is headless - run with `trunk serve` to see the ball in a browser");

    let canvas = PixelCanvas::new(settings.width, settings.height, settings.background)?;
    let mut host = Host::new(canvas, settings.frame_rate).with_frame_limit(settings.max_frames);
    host.animate(BounceSimulator::from_settings(&settings));
    host.run()
}
