use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The side of a reaction a species participates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Reactant,
    Product,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Reactant, Role::Product];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Reactant => f.write_str("reactant"),
            Role::Product => f.write_str("product"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid role '{0}': expected 'reactant' or 'product'")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reactant" => Ok(Role::Reactant),
            "product" => Ok(Role::Product),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}
