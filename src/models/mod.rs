//! Wire models for the usage metering, dashboard, monitor and SLO endpoints
//!
//! Models are organized by API area. Every top-level model implements
//! [`WireModel`](crate::codec::WireModel) and is decoded through
//! [`Record`](crate::codec::Record).

mod dashboard;
mod monitor;
mod slo;
mod usage;
mod usage_summary;
mod widget;

// Re-export all models for convenient access
pub use dashboard::{Creator, DashboardListItem, DashboardType};
pub use monitor::MonitorType;
pub use slo::{SloOverallStatuses, SloRawErrorBudgetRemaining, SloState, SloStatus, SloTimeframe};
pub use usage::{
    MonthlyUsageAttributionValues, UsageAttributionValues, UsageCloudSecurityPostureManagementHour,
};
pub use usage_summary::{UsageSummaryDate, UsageSummaryResponse};
pub use widget::{
    RunWorkflowWidgetDefinition, RunWorkflowWidgetDefinitionType, RunWorkflowWidgetInput,
    WidgetCustomLink, WidgetLiveSpan, WidgetTextAlign, WidgetTime,
};
