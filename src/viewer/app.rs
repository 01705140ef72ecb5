use std::sync::Arc;

use eframe::{egui_glow, glow};
use egui::{Color32, Vec2};

use crate::{
    config::SceneConfig,
    gfx::{GfxError, GlDevice},
};

use super::{FrameClock, RenderContext};

/// The running viewer. Only exists once setup has succeeded.
pub struct Viewer {
    /// Behind an `Arc` so the paint callback can hold on to it.
    context: Arc<RenderContext<GlDevice>>,
    device: GlDevice,
    clock: FrameClock,
    size: f32,
}

impl Viewer {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &SceneConfig,
        size: f32,
    ) -> Result<Self, SetupError> {
        let gl = cc.gl.clone().ok_or(SetupError::NoGlContext)?;
        let device = GlDevice(gl);

        let context = RenderContext::setup(&device, config, glam::Vec2::splat(size))
            .inspect_err(|e| log::error!("Setup failed: {e}"))?;

        // The clock starts only after everything is on the GPU
        Ok(Self {
            context: Arc::new(context),
            device,
            clock: FrameClock::start(),
            size,
        })
    }

    fn custom_painting(&self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(self.size), egui::Sense::hover());

        let context = self.context.clone();
        let elapsed = self.clock.elapsed_secs();

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |_info, painter| {
                context.render_frame(&GlDevice(painter.gl().clone()), elapsed);
            })),
        };
        ui.painter().add(callback);
    }
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                self.custom_painting(ui);
            });
        ctx.request_repaint();
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if gl.is_some() {
            log::info!("Releasing GPU resources");
            self.context.destroy(&self.device);
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("eframe was not started with the glow renderer")]
    NoGlContext,
    #[error(transparent)]
    Gfx(#[from] GfxError),
}
