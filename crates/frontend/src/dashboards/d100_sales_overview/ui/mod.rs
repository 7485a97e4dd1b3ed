mod dashboard;
mod results;
mod sidebar;

pub use dashboard::SalesOverviewDashboard;
