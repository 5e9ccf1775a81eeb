#![allow(dead_code)]

pub mod common;
pub mod update_counter_builder;
