pub mod annotations;
pub mod model;
