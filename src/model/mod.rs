pub mod city;
pub mod config;
pub mod state;
