mod app;
pub mod style;
pub mod text;
pub mod tree;

pub use app::RootView;
