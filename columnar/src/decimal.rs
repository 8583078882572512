use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed-point decimal `mantissa × 10^(−scale)`.
///
/// Equality is structural: `1.0` (`10`, scale 1) and `1.00` (`100`, scale 2)
/// are different values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal {
    mantissa: i128,
    scale: i8,
}

impl Decimal {
    pub fn new(mantissa: i128, scale: i8) -> Self {
        Self { mantissa, scale }
    }

    /// The unscaled integer.
    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    pub fn scale(&self) -> i8 {
        self.scale
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mantissa < 0 {
            f.write_str("-")?;
        }
        let digits = self.mantissa.unsigned_abs().to_string();
        if self.scale <= 0 {
            f.write_str(&digits)?;
            if self.mantissa != 0 {
                for _ in 0..self.scale.unsigned_abs() {
                    f.write_str("0")?;
                }
            }
            return Ok(());
        }

        let scale = self.scale as usize;
        if digits.len() <= scale {
            f.write_str("0.")?;
            for _ in 0..(scale - digits.len()) {
                f.write_str("0")?;
            }
            f.write_str(&digits)
        } else {
            let split = digits.len() - scale;
            write!(f, "{}.{}", &digits[..split], &digits[split..])
        }
    }
}
