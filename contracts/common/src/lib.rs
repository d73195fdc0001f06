#![no_std]

pub mod address;
pub mod ttl;
