pub mod talker;

pub use talker::{NewTalker, Talk, Talker};
