//! Homepage widgets entry point
//!
//! Wires every widget to its DOM anchor and runs the particle animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, MouseEvent};

    use homepage_widgets::consts::*;
    use homepage_widgets::field::ParticleField;
    use homepage_widgets::map::MapConfig;
    use homepage_widgets::persistence::{LocalStore, MemoryStore, PreferenceStore};
    use homepage_widgets::renderer::CanvasRenderer;
    use homepage_widgets::theme::{Theme, ThemeToggle};
    use homepage_widgets::{clock, heatmap, map, platform};

    /// Particle animation instance
    struct Particles {
        field: ParticleField,
        renderer: CanvasRenderer,
    }

    impl Particles {
        /// Advance one frame and draw it
        fn frame(&mut self) {
            self.field.advance();
            // Read every frame so a toggle shows up immediately
            self.renderer.draw(&self.field, current_theme());
        }

        fn resize(&mut self) {
            if let Some(surface) = platform::page_surface() {
                self.field.resize(surface);
                self.renderer.resize(surface);
            }
        }
    }

    fn current_theme() -> Theme {
        let dark = platform::document()
            .and_then(|d| d.body())
            .map(|body| body.class_list().contains(DARK_MODE_CLASS))
            .unwrap_or(false);
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Homepage widgets starting...");

        let Some(document) = platform::document() else {
            log::error!("No document, nothing to do");
            return;
        };

        // Each widget is independent: a missing anchor skips only that one
        setup_map(&document);
        setup_clock(&document);
        setup_theme_toggle(&document);
        setup_particles(&document);
        setup_heatmap(&document);
        setup_last_updated(&document);

        log::info!("Homepage widgets running!");
    }

    fn setup_map(document: &Document) {
        if platform::anchor(document, MAP_ID).is_none() {
            return;
        }

        let init = || {
            if let Err(e) = map::init_map(&MapConfig::default()) {
                log::warn!("Map init failed: {:?}", e);
            }
        };

        // Tiles and Leaflet itself come in with the page, wait for them
        if document.ready_state() == "complete" {
            init();
            return;
        }
        let Some(window) = platform::window() else {
            return;
        };
        let closure = Closure::once(move |_event: web_sys::Event| init());
        let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_clock(document: &Document) {
        let Some(el) = platform::anchor(document, CLOCK_ID) else {
            return;
        };

        let update = move || {
            if let Some(text) = clock::clock_text_now() {
                el.set_text_content(Some(&text));
            }
        };
        update();
        gloo_timers::callback::Interval::new(CLOCK_REFRESH_MS, update).forget();
    }

    fn setup_theme_toggle(document: &Document) {
        let Some(button) = platform::anchor(document, THEME_TOGGLE_ID) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };

        match LocalStore::open() {
            Some(store) => install_theme_toggle(button, body, store),
            None => {
                log::warn!("LocalStorage unavailable, theme will not persist");
                install_theme_toggle(button, body, MemoryStore::new());
            }
        }
    }

    fn install_theme_toggle<S: PreferenceStore + 'static>(
        button: Element,
        body: HtmlElement,
        store: S,
    ) {
        let mut toggle = ThemeToggle::new(store);
        apply_theme(&body, &button, toggle.theme());

        let target = button.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let theme = toggle.toggle();
            apply_theme(&body, &target, theme);
            log::info!("Theme switched to {}", theme.as_str());
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn apply_theme(body: &HtmlElement, button: &Element, theme: Theme) {
        let classes = body.class_list();
        let result = if theme.is_dark() {
            classes.add_1(DARK_MODE_CLASS)
        } else {
            classes.remove_1(DARK_MODE_CLASS)
        };
        if let Err(e) = result {
            log::warn!("Failed to update body class: {:?}", e);
        }
        button.set_text_content(Some(theme.icon()));
    }

    fn setup_particles(document: &Document) {
        let Some(canvas) = platform::anchor(document, PARTICLES_CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            return;
        };
        let Some(surface) = platform::page_surface() else {
            log::warn!("Could not measure page, particles disabled");
            return;
        };

        let renderer = match CanvasRenderer::new(canvas, surface) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::warn!("Canvas unavailable, particles disabled: {:?}", e);
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let particles = Rc::new(RefCell::new(Particles {
            field: ParticleField::new(seed, surface),
            renderer,
        }));
        log::info!("Particle field initialized with seed: {}", seed);

        setup_particle_input(particles.clone());
        request_animation_frame(particles);
    }

    fn setup_particle_input(particles: Rc<RefCell<Particles>>) {
        let Some(window) = platform::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Resize - new surface size, particles stay put
        {
            let particles = particles.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                particles.borrow_mut().resize();
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - pointer in document coordinates
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let x = event.client_x() as f64;
                let y = event.client_y() as f64 + platform::scroll_y();
                particles
                    .borrow_mut()
                    .field
                    .set_pointer(Vec2::new(x as f32, y as f32));
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(particles: Rc<RefCell<Particles>>) {
        let Some(window) = platform::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            animation_loop(particles);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn animation_loop(particles: Rc<RefCell<Particles>>) {
        particles.borrow_mut().frame();
        request_animation_frame(particles);
    }

    fn setup_heatmap(document: &Document) {
        let Some(container) = platform::anchor(document, HEATMAP_ID) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(heatmap::dom::load_and_render(
            document.clone(),
            container,
        ));
    }

    fn setup_last_updated(document: &Document) {
        if let Some(el) = platform::anchor(document, LAST_UPDATED_ID) {
            let today = chrono::Local::now().date_naive();
            el.set_text_content(Some(&clock::format_long_date(today)));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use chrono::Local;
    use homepage_widgets::heatmap::{HeatmapConfig, synthetic, text_preview};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Homepage widgets (native) starting...");
    log::info!("The widgets need a browser - build for wasm32 with `trunk serve`");

    let config = HeatmapConfig::default();
    let now = Local::now();
    let today = now.date_naive();
    let mut rng = Pcg32::seed_from_u64(now.timestamp() as u64);
    let days = synthetic::generate(today, config.days, &mut rng);

    let total: u32 = days.iter().map(|d| d.count).sum();
    log::info!(
        "Generated {} days ending {} ({} contributions)",
        days.len(),
        today,
        total
    );
    println!("{}", text_preview(&days));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
