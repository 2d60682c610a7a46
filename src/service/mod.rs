pub mod bakery;

pub use bakery::BakeryService;
