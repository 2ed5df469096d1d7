use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::types::SynthesisResponse;

/// Completions of background requests, fed back into the controller by the
/// UI loop. Requests run as separate tasks so the UI keeps handling input
/// while they are outstanding.
#[derive(Debug)]
pub enum AppEvent {
    SynthesisFinished {
        outcome: Result<SynthesisResponse, ApiError>,
        elapsed: Duration,
    },
    ApiTestFinished {
        outcome: Result<SynthesisResponse, ApiError>,
    },
}
