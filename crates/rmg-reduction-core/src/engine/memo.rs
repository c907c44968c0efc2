/// A rate coefficient that is computed at most once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RateSlot {
    #[default]
    Unset,
    Computed(f64),
}

impl RateSlot {
    pub fn value(&self) -> Option<f64> {
        match self {
            RateSlot::Unset => None,
            RateSlot::Computed(value) => Some(*value),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, RateSlot::Computed(_))
    }
}
