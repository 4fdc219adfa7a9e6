use rand::RngCore;
use rand::rngs::OsRng;

use crate::application::interface::code::CodeGenerator;
use crate::domain::entities::reset_code::{MIN_RESET_CODE, ResetCode};

const DRAW_MASK: u32 = (1 << 20) - 1;

/// Draws codes from the operating system CSPRNG.
///
/// Each draw takes 20 random bits and offsets them by the lowest code. Draws
/// that land above the highest code are thrown away, which keeps the result
/// uniform over all 900,000 codes.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRngCodeGenerator;

impl CodeGenerator for OsRngCodeGenerator {
    fn generate(&self) -> ResetCode {
        loop {
            let draw = OsRng.next_u32() & DRAW_MASK;
            if let Ok(code) = ResetCode::try_from(MIN_RESET_CODE + draw) {
                return code;
            }
        }
    }
}
