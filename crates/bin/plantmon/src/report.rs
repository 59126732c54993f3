//! JSON report printed on stdout.

use serde::Serialize;

use plantmon_domain::service::ServiceCall;
use plantmon_domain::stats::Stats;
use plantmon_domain::view::PlantView;

/// Everything the card would render, plus the service calls issued.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub title: &'a str,
    pub plants: &'a [PlantView],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub calls: Vec<ServiceCall>,
}
