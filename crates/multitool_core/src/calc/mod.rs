//! Pure numeric calculators.
//!
//! Every operation is a function of its inputs; invalid input yields `None`
//! or a typed error and never partial state.

pub mod age;
pub mod bmi;
pub mod calculator;
pub mod calendar;
pub mod convert;
pub mod discount;
pub mod emi;
pub mod input;
pub mod tip;
