mod report;
mod text;
mod timestamp;

pub use report::{BuildReport, ReportArea, ReportRestriction, ReportSummary, SurveyReport};
pub use text::render_text_report;
pub use timestamp::{format_utc, utc_timestamp};
