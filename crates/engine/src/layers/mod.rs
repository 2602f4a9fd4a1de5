mod input_layer;

pub use input_layer::InputLayer;
