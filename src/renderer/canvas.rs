//! 2D canvas renderer for the particle field

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::{ParticleField, Surface};
use crate::theme::Theme;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    surface: Surface,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, surface: Surface) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;

        let mut renderer = Self {
            canvas,
            ctx,
            surface,
        };
        renderer.resize(surface);
        Ok(renderer)
    }

    /// Size the backing store for the pixel ratio and the element in CSS px.
    /// Drawing stays in CSS pixels via the context transform.
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;

        let (width, height) = surface.backing_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", surface.width));
        let _ = style.set_property("height", &format!("{}px", surface.height));

        // Setting width/height resets the transform, so this never compounds
        let dpr = surface.pixel_ratio as f64;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("Failed to scale canvas: {:?}", e);
        }
    }

    /// Clear and draw every particle as a filled circle
    pub fn draw(&self, field: &ParticleField, theme: Theme) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.surface.width as f64,
            self.surface.height as f64,
        );
        self.ctx.set_fill_style_str(theme.particle_fill());

        for p in &field.particles {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                p.pos.x as f64,
                p.pos.y as f64,
                p.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.close_path();
            self.ctx.fill();
        }
    }
}
