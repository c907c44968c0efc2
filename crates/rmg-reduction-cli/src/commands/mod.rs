pub mod inspect;
pub mod rates;
