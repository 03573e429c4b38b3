//! Visual element factory: display nodes and their builders.

mod factory;
mod node;

pub use factory::{ElementSpec, create_element, mount};
pub use node::{Element, ElementKind};
