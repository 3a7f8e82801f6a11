mod intersperse;
mod join;
mod multi;
mod transform;
mod window;

pub use self::{intersperse::*, join::*, multi::*, transform::*, window::*};
