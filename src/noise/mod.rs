pub mod fractal;
pub mod value;

pub use fractal::{fractal_noise, NoiseProfile};
pub use value::noise2d;
