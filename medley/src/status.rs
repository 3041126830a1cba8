//! Derives one HTTP status from a fully populated aggregate response.

use medley_types::{AggregateResponse, AppError, pick_better};

/// Derive the overall response status.
///
/// - No feature errors anywhere: 200.
/// - Data and errors coexist, within one provider or across providers:
///   207 Multi-Status.
/// - Everything failed: the status of the single best error across all
///   providers and features, picked by the fixed priority table so
///   client-correctable errors surface over upstream failures. Ties keep
///   the first error encountered in iteration order.
#[must_use]
pub fn select_status(resp: &AggregateResponse) -> u16 {
    let mut has_data = false;
    let mut has_errors = false;
    for provider in resp.providers.values() {
        has_data |= provider.has_data();
        has_errors |= provider.has_errors();
    }

    if !has_errors {
        return 200;
    }
    if has_data {
        return 207;
    }
    select_priority_error(resp)
}

fn select_priority_error(resp: &AggregateResponse) -> u16 {
    let mut best: Option<&AppError> = None;
    for provider in resp.providers.values() {
        for err in provider.feature_errors.values() {
            best = Some(match best {
                None => err,
                Some(current) => pick_better(current, err),
            });
        }
    }
    best.map_or(500, AppError::status)
}
