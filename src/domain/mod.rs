// Domain layer - Pure data models, no I/O
pub mod city;
pub mod dashboard;
pub mod forecast;
