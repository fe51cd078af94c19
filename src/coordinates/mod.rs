pub mod angle;
pub mod cartesian;
pub mod position;

pub use angle::Angle;
pub use cartesian::{Axis, Vector3};
pub use position::Position;
