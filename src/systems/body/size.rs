/// Maps mass to the block's visual (and collision) width
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeRule {
    /// Width per decimal digit of `floor(mass)`
    pub scale: f64,
    /// Fixed width for masses below 1, if set
    pub min_visual_size: Option<f64>,
}

impl Default for SizeRule {
    fn default() -> Self {
        Self {
            scale: crate::config::DEFAULT_SIZE_SCALE,
            min_visual_size: Some(crate::config::DEFAULT_MIN_VISUAL_SIZE),
        }
    }
}

impl SizeRule {
    pub fn size_for(&self, mass: f64) -> f64 {
        if mass < 1.0 {
            if let Some(min_size) = self.min_visual_size {
                return min_size;
            }
        }
        digit_count(mass) as f64 * self.scale
    }
}

/// Decimal digits in `floor(mass)`; anything below 1 counts as the single digit "0".
pub fn digit_count(mass: f64) -> u32 {
    let whole = mass.floor();
    if !whole.is_finite() || whole < 1.0 {
        return 1;
    }
    let mut digits = whole.log10().floor() as i32 + 1;
    // log10 can land just below an exact power of ten, or just above
    if 10f64.powi(digits - 1) > whole {
        digits -= 1;
    } else if 10f64.powi(digits) <= whole {
        digits += 1;
    }
    digits as u32
}
