pub mod count_up;
pub mod particles;

pub use count_up::CountUp;
pub use particles::ParticleField;
