pub mod cart;
pub mod order;
pub mod session_store;
pub mod upstream;

pub use session_store::SessionStore;
pub use upstream::{BillingReply, UpstreamClient};
