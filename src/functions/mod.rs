pub mod elementary;
pub mod operators;

use crate::registry::Registry;

pub fn register_functions(registry: &mut Registry) {
    elementary::register(registry);
    operators::register(registry);
}
