pub mod product;
pub mod view;

pub use product::*;
pub use view::*;
