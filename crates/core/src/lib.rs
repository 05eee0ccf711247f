#![feature(int_roundings)]
//! Domain logic for the qurban savings service.
//!
//! Pure computation and validation only: fee derivation, installment
//! planning, and the shared error taxonomy. Persistence lives in
//! `qurban-db`, the HTTP surface in `qurban-api`.

pub mod error;
pub mod fees;
pub mod installments;
pub mod types;
