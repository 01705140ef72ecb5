pub mod app;
pub mod clock;
pub mod context;

pub use app::Viewer;
pub use clock::FrameClock;
pub use context::RenderContext;
