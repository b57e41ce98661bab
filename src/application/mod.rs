// Application layer: compute use case and export payload

pub mod export;
pub mod optimizer;

pub use export::render_plan_text;
pub use optimizer::CuttingOptimizer;
