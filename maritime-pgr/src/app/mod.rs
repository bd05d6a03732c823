mod operation;
mod pgr_app;

pub use operation::PgrOperation;
pub use pgr_app::PgrApp;
