// Engines module exports

pub mod dispatcher;
pub mod enricher;
pub mod estimators;
pub mod pricing;
pub mod recommender;
pub mod shared;
