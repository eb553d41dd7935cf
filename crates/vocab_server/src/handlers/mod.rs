pub mod health;
pub mod languages;
pub mod reconcile;
pub mod words;
