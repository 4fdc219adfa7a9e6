use crate::domain::entities::reset_code::ResetCode;

pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> ResetCode;
}
