pub mod annotations;
pub mod io;
pub mod map;
pub mod persona;

pub use annotations::{Comment, Sticker};
pub use map::{Cell, CellKey, JourneyMap, Lane, Stage};
pub use persona::Persona;
