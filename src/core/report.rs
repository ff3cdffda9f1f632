use crate::domain::model::{ClientUser, ExecutorUser, Report, SortMode};
use crate::utils::error::{ReportError, Result};

pub const ALL_DEMANDS_MET: &str = "This executor meets all demands of all clients!";

/// Sort `clients` by `sort`, keep the ones `executor` can serve and render the summary.
///
/// Returns [`ReportError::NoDemandsMet`] when no client is met. An empty client
/// list counts as every client being met.
pub fn show(sort: SortMode, clients: &[ClientUser], executor: &ExecutorUser) -> Result<Report> {
    let origin = &executor.position;

    let mut sorted: Vec<&ClientUser> = clients.iter().collect();
    match sort {
        SortMode::Reward => sorted.sort_by(|a, b| b.reward.total_cmp(&a.reward)),
        SortMode::Distance => sorted.sort_by(|a, b| {
            a.position
                .distance_to(origin)
                .total_cmp(&b.position.distance_to(origin))
        }),
    }

    let possibilities = executor.possibility_set();
    let met: Vec<&ClientUser> = sorted
        .into_iter()
        .filter(|client| client.is_met_by(&possibilities))
        .collect();

    let total = clients.len();
    tracing::debug!("{} of {} clients met (sorted by {})", met.len(), total, sort);

    if met.len() == total {
        return Ok(Report {
            met: met.len(),
            total,
            text: ALL_DEMANDS_MET.to_string(),
        });
    }

    if met.is_empty() {
        return Err(ReportError::NoDemandsMet);
    }

    let mut lines = vec![
        format!(
            "This executor meets the demands of only {} out of {} clients",
            met.len(),
            total
        ),
        String::new(),
        format!("Available clients sorted by {}:", sort.heading()),
    ];
    lines.extend(met.iter().map(|client| {
        format!(
            "name: {}, distance: {:.3}, reward: {}",
            client.name,
            client.position.distance_to(origin),
            client.reward
        )
    }));

    Ok(Report {
        met: met.len(),
        total,
        text: lines.join("\n"),
    })
}
