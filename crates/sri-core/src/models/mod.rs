pub mod demographics;
pub mod norms;
pub mod progress;
pub mod response;
pub mod results;
pub mod session;
