//! addressbook - An address book web service with geodesic radius queries

pub mod address;
pub mod cli;
pub mod distance;
pub mod http_server;
pub mod observability;
pub mod store;
