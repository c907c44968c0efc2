use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can be identified by a species label.
///
/// Stoichiometry is keyed on labels alone, so two distinct species objects
/// sharing a label are counted as the same species.
pub trait Labeled {
    fn label(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Species {
    label: String,
}

impl Species {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Labeled for Species {
    fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_species_stores_label() {
        let species = Species::new("CH4");
        assert_eq!(species.label(), "CH4");
        assert_eq!(species.to_string(), "CH4");
    }

    #[test]
    fn species_with_equal_labels_compare_equal() {
        assert_eq!(Species::new("H2"), Species::new("H2"));
        assert_ne!(Species::new("H2"), Species::new("H"));
    }
}
