// Dashboard records: engineers, their time-off calendar and the price list.
// Handlers validate request bodies here and delegate persistence to `store::DataStore`.

pub mod handlers;
pub mod validation;
