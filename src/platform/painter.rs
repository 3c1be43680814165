//! Canvas 2D painter
//!
//! Executes render commands in order. Draw calls that the browser rejects are
//! logged and skipped; a bad frame never stops the loop.

use web_sys::CanvasRenderingContext2d;

use super::loader::LoadedAssets;
use crate::sim::RenderCommand;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    assets: LoadedAssets,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d, assets: LoadedAssets) -> Self {
        Self { ctx, assets }
    }

    pub fn paint(&self, commands: &[RenderCommand]) {
        for command in commands {
            if let Err(e) = self.paint_one(command) {
                log::warn!("draw failed: {:?}", e);
            }
        }
    }

    fn paint_one(&self, command: &RenderCommand) -> Result<(), wasm_bindgen::JsValue> {
        let ctx = &self.ctx;
        match command {
            RenderCommand::Background { size } => {
                ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    &self.assets.background,
                    0.0,
                    0.0,
                    size.x as f64,
                    size.y as f64,
                )?;
            }
            RenderCommand::Sprite {
                sprite,
                pos,
                size,
                alpha,
            } => {
                let Some(img) = self.assets.sprites.get(sprite.0) else {
                    return Ok(());
                };
                ctx.save();
                ctx.set_global_alpha(*alpha as f64);
                let result = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    pos.x as f64,
                    pos.y as f64,
                    size.x as f64,
                    size.y as f64,
                );
                ctx.restore();
                result?;
            }
            RenderCommand::Ring {
                center,
                radius,
                alpha,
                line_width,
            } => {
                ctx.begin_path();
                ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                )?;
                ctx.set_stroke_style_str(&format!("rgba(255,255,255,{})", alpha));
                ctx.set_line_width(*line_width as f64);
                ctx.stroke();
            }
        }
        Ok(())
    }
}
