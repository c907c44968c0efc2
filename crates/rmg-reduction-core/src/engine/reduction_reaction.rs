use super::error::EngineError;
use super::memo::RateSlot;
use super::stoichiometry::Stoichiometry;
use crate::core::io::mechanism::Mechanism;
use crate::core::models::reaction::{ElementaryReaction, ReactionRecord};
use crate::core::models::role::Role;
use crate::core::models::species::Labeled;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, trace};

/// A reaction record paired with its forward and backward rate coefficients,
/// each computed at most once, and the per-role stoichiometry of its species.
///
/// The first call to [`forward_rate`](Self::forward_rate) or
/// [`backward_rate`](Self::backward_rate) fixes the value for the lifetime of
/// the wrapper. Later calls return that value whatever temperature and
/// pressure they are given.
///
/// Cached state is never carried across serialization: the wrapper serializes
/// as its record, and [`reconstruct`](Self::reconstruct) rebuilds it from that
/// record with empty rate slots.
pub struct ReductionReaction<'a, R: ReactionRecord> {
    record: &'a R,
    reactants: &'a [R::Species],
    products: &'a [R::Species],
    forward: RateSlot,
    backward: RateSlot,
    stoichiometry: Stoichiometry,
}

impl<'a, R: ReactionRecord> ReductionReaction<'a, R> {
    pub fn new(record: &'a R) -> Self {
        let reactants = record.reactants();
        let products = record.products();
        Self {
            record,
            reactants,
            products,
            forward: RateSlot::Unset,
            backward: RateSlot::Unset,
            stoichiometry: Stoichiometry::from_species(reactants, products),
        }
    }

    /// Rebuilds a wrapper from the record it was serialized from.
    ///
    /// Equivalent to [`new`](Self::new): stoichiometry is recounted and both
    /// rate slots start out unset.
    pub fn reconstruct(record: &'a R) -> Self {
        Self::new(record)
    }

    pub fn record(&self) -> &'a R {
        self.record
    }

    pub fn reactants(&self) -> &'a [R::Species] {
        self.reactants
    }

    pub fn products(&self) -> &'a [R::Species] {
        self.products
    }

    pub fn stoichiometry(&self) -> &Stoichiometry {
        &self.stoichiometry
    }

    pub fn forward_slot(&self) -> RateSlot {
        self.forward
    }

    pub fn backward_slot(&self) -> RateSlot {
        self.backward
    }

    /// Forward rate coefficient; the record is only consulted on the first call.
    pub fn forward_rate(&mut self, temperature: f64, pressure: f64) -> Result<f64, EngineError> {
        match self.forward {
            RateSlot::Computed(kf) => {
                trace!(reaction = %self.record, kf, "Forward rate served from cache.");
                Ok(kf)
            }
            RateSlot::Unset => {
                let kf = self.record.rate_coefficient(temperature, pressure)?;
                debug!(reaction = %self.record, temperature, pressure, kf, "Computed forward rate.");
                self.forward = RateSlot::Computed(kf);
                Ok(kf)
            }
        }
    }

    /// Backward rate coefficient, `kf / Keq(T)`, with `kf` taken from
    /// [`forward_rate`](Self::forward_rate). Computed once, like the forward rate.
    pub fn backward_rate(&mut self, temperature: f64, pressure: f64) -> Result<f64, EngineError> {
        if let RateSlot::Computed(kb) = self.backward {
            trace!(reaction = %self.record, kb, "Backward rate served from cache.");
            return Ok(kb);
        }

        let kf = self.forward_rate(temperature, pressure)?;
        let keq = self.record.equilibrium_constant(temperature)?;
        if keq == 0.0 {
            return Err(EngineError::ZeroEquilibriumConstant {
                reaction: self.record.to_string(),
                temperature,
            });
        }

        let kb = kf / keq;
        debug!(reaction = %self.record, temperature, keq, kb, "Computed backward rate.");
        self.backward = RateSlot::Computed(kb);
        Ok(kb)
    }

    /// Number of times `species` (matched by label) occurs in the given role.
    ///
    /// Fails when the label never appeared in that role; absence is not read as zero.
    pub fn stoichiometric_coefficient<S: Labeled + ?Sized>(
        &self,
        species: &S,
        role: Role,
    ) -> Result<usize, EngineError> {
        self.stoichiometry
            .coefficient(species.label(), role)
            .ok_or_else(|| EngineError::MissingSpecies {
                label: species.label().to_string(),
                role,
            })
    }
}

/// Wraps every reaction of `mechanism`, preserving order.
pub fn wrap_mechanism(mechanism: &Mechanism) -> Vec<ReductionReaction<'_, ElementaryReaction>> {
    mechanism.reactions.iter().map(ReductionReaction::new).collect()
}

impl<R: ReactionRecord> fmt::Display for ReductionReaction<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.record, f)
    }
}

impl<R: ReactionRecord> fmt::Debug for ReductionReaction<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReductionReaction")
            .field("reaction", &self.record.to_string())
            .field("forward", &self.forward)
            .field("backward", &self.backward)
            .field("stoichiometry", &self.stoichiometry)
            .finish()
    }
}

impl<R: ReactionRecord + Serialize> Serialize for ReductionReaction<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}
