pub mod income;
pub mod order;
pub mod sale;
pub mod stock;

pub use income::*;
pub use order::*;
pub use sale::*;
pub use stock::*;
