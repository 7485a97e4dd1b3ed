//! Wire contracts shared between the dashboard frontend and the sales
//! aggregation backend.

pub mod dashboards;
