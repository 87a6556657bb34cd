// Domain layer: the profile, template selection and the ports the generation
// pipeline is written against.

pub mod model;
pub mod ports;
pub mod template;
