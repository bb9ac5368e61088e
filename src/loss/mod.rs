pub mod additive;
pub mod mse;
pub mod loss_type;

pub use additive::AdditiveLoss;
pub use mse::MseLoss;
pub use loss_type::LossType;
