//! Collapses bursts of calls into a single delayed callback

pub use dispatcher::Dispatcher;
pub use policy::Policy;

mod dispatcher;
mod policy;
