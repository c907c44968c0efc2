use super::error::IoError;
use crate::core::models::reaction::ElementaryReaction;
use crate::core::models::species::{Labeled, Species};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const INLINE_SOURCE: &str = "<inline>";

/// An ordered set of reactions read from a TOML mechanism file.
///
/// ```toml
/// [[reactions]]
/// reactants = ["A", "A"]
/// products = ["B"]
///
/// [reactions.kinetics]
/// a = 1.0e6
/// ea = 4.0e4
///
/// [reactions.thermo]
/// delta-h = -5.0e4
/// delta-s = -20.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mechanism {
    #[serde(default)]
    pub reactions: Vec<ElementaryReaction>,
}

impl Mechanism {
    pub fn new(reactions: Vec<ElementaryReaction>) -> Result<Self, IoError> {
        let mut mechanism = Self { reactions };
        mechanism.trim_labels();
        mechanism.validate()?;
        Ok(mechanism)
    }

    pub fn load(path: &Path) -> Result<Self, IoError> {
        let content = std::fs::read_to_string(path).map_err(|e| IoError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mechanism = Self::parse(&content, &path.to_string_lossy())?;
        debug!(
            path = %path.display(),
            num_reactions = mechanism.reactions.len(),
            "Loaded reaction mechanism."
        );
        Ok(mechanism)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, IoError> {
        Self::parse(content, INLINE_SOURCE)
    }

    fn parse(content: &str, source_name: &str) -> Result<Self, IoError> {
        let mut mechanism: Self = toml::from_str(content).map_err(|e| IoError::Toml {
            path: source_name.to_string(),
            source: e,
        })?;
        mechanism.trim_labels();
        mechanism.validate()?;
        Ok(mechanism)
    }

    /// Strips surrounding whitespace from every species label, matching how
    /// concentration tables are read.
    fn trim_labels(&mut self) {
        for reaction in &mut self.reactions {
            for species in reaction
                .reactants
                .iter_mut()
                .chain(reaction.products.iter_mut())
            {
                let trimmed = species.label().trim();
                if trimmed.len() != species.label().len() {
                    *species = Species::new(trimmed);
                }
            }
        }
    }

    fn validate(&self) -> Result<(), IoError> {
        for (index, reaction) in self.reactions.iter().enumerate() {
            if reaction.reactants.is_empty() {
                return Err(IoError::InvalidReaction {
                    index,
                    message: "reaction has no reactants".to_string(),
                });
            }
            if reaction.products.is_empty() {
                return Err(IoError::InvalidReaction {
                    index,
                    message: "reaction has no products".to_string(),
                });
            }
            let has_blank_label = reaction
                .reactants
                .iter()
                .chain(reaction.products.iter())
                .any(|s| s.label().is_empty());
            if has_blank_label {
                return Err(IoError::InvalidReaction {
                    index,
                    message: "species label must not be empty".to_string(),
                });
            }
            reaction
                .kinetics
                .validate()
                .map_err(|e| IoError::InvalidReaction {
                    index,
                    message: e.to_string(),
                })?;
        }
        Ok(())
    }

    /// Distinct species labels in order of first appearance.
    pub fn species_labels(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.reactions
            .iter()
            .flat_map(|r| r.reactants.iter().chain(r.products.iter()))
            .filter(|s| seen.insert(s.label().to_string()))
            .map(|s| s.label().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinetics::arrhenius::Arrhenius;
    use crate::core::kinetics::thermo::ReactionThermo;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    const TWO_REACTIONS: &str = r#"
        [[reactions]]
        reactants = ["A", "A"]
        products = ["B"]

        [reactions.kinetics]
        a = 10.0

        [reactions.thermo]
        delta-h = -1000.0
        delta-s = 0.0

        [[reactions]]
        reactants = ["B", "C"]
        products = ["D", "A"]

        [reactions.kinetics]
        a = 2.0
        n = 0.5
        ea = 1.0e4
    "#;

    #[test]
    fn from_toml_str_parses_all_reactions_in_order() {
        let mechanism = Mechanism::from_toml_str(TWO_REACTIONS).unwrap();
        assert_eq!(mechanism.reactions.len(), 2);
        assert_eq!(mechanism.reactions[0].to_string(), "A + A <=> B");
        assert_eq!(mechanism.reactions[1].to_string(), "B + C <=> D + A");
        assert_eq!(mechanism.reactions[1].kinetics.n, 0.5);
        assert_eq!(mechanism.reactions[0].thermo.delta_h, -1000.0);
    }

    #[test]
    fn species_labels_are_distinct_in_first_appearance_order() {
        let mechanism = Mechanism::from_toml_str(TWO_REACTIONS).unwrap();
        assert_eq!(mechanism.species_labels(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn load_reads_mechanism_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("mechanism.toml");
        let mut file = File::create(&file_path).unwrap();
        write!(file, "{}", TWO_REACTIONS).unwrap();

        let mechanism = Mechanism::load(&file_path).unwrap();
        assert_eq!(mechanism.reactions.len(), 2);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = Mechanism::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(IoError::Io { .. })));
    }

    #[test]
    fn from_toml_str_rejects_unknown_keys() {
        let content = r#"
            [[reactions]]
            reactants = ["A"]
            products = ["B"]
            catalyst = "Pt"

            [reactions.kinetics]
            a = 1.0
        "#;
        let result = Mechanism::from_toml_str(content);
        assert!(matches!(result, Err(IoError::Toml { .. })));
    }

    #[test]
    fn from_toml_str_rejects_reaction_without_products() {
        let content = r#"
            [[reactions]]
            reactants = ["A"]
            products = []

            [reactions.kinetics]
            a = 1.0
        "#;
        let result = Mechanism::from_toml_str(content);
        assert!(matches!(
            result,
            Err(IoError::InvalidReaction { index: 0, .. })
        ));
    }

    #[test]
    fn from_toml_str_rejects_blank_species_label() {
        let content = r#"
            [[reactions]]
            reactants = ["A"]
            products = ["B"]

            [reactions.kinetics]
            a = 1.0

            [[reactions]]
            reactants = ["B", " "]
            products = ["C"]

            [reactions.kinetics]
            a = 1.0
        "#;
        let result = Mechanism::from_toml_str(content);
        assert!(matches!(
            result,
            Err(IoError::InvalidReaction { index: 1, .. })
        ));
    }

    #[test]
    fn empty_document_is_an_empty_mechanism() {
        let mechanism = Mechanism::from_toml_str("").unwrap();
        assert!(mechanism.reactions.is_empty());
        assert!(mechanism.species_labels().is_empty());
    }

    #[test]
    fn labels_are_trimmed_on_load() {
        let content = r#"
            [[reactions]]
            reactants = [" A ", "B"]
            products = ["C  "]

            [reactions.kinetics]
            a = 1.0
        "#;
        let mechanism = Mechanism::from_toml_str(content).unwrap();
        assert_eq!(mechanism.reactions[0].to_string(), "A + B <=> C");
        assert_eq!(mechanism.species_labels(), vec!["A", "B", "C"]);
    }

    #[test]
    fn new_trims_labels_of_programmatic_reactions() {
        let reaction = ElementaryReaction::new(
            vec![Species::new("\tOH")],
            vec![Species::new("OH ")],
            Arrhenius::new(1.0, 0.0, 0.0),
            ReactionThermo::default(),
        );
        let mechanism = Mechanism::new(vec![reaction]).unwrap();
        assert_eq!(mechanism.species_labels(), vec!["OH"]);
    }

    #[test]
    fn from_toml_str_rejects_zero_reference_temperature() {
        let content = r#"
            [[reactions]]
            reactants = ["A"]
            products = ["B"]

            [reactions.kinetics]
            a = 1.0
            n = 1.0
            t0 = 0.0
        "#;
        let result = Mechanism::from_toml_str(content);
        assert!(matches!(
            result,
            Err(IoError::InvalidReaction { index: 0, message }) if message.contains("Reference temperature")
        ));
    }

    #[test]
    fn from_toml_str_rejects_inverted_temperature_range() {
        let content = r#"
            [[reactions]]
            reactants = ["A"]
            products = ["B"]

            [reactions.kinetics]
            a = 1.0
            t-min = 2000.0
            t-max = 300.0
        "#;
        let result = Mechanism::from_toml_str(content);
        assert!(matches!(
            result,
            Err(IoError::InvalidReaction { index: 0, message }) if message.contains("range is empty")
        ));
    }
}
