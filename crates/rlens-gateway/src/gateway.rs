//! The gateway seam between panel logic and the remote service

use std::collections::BTreeMap;

use crate::error::GatewayError;
use crate::RawPayload;

/// Request body: input field name to submitted value.
pub type RequestInputs = BTreeMap<String, String>;

/// Performs exactly one call to the analysis service per invocation.
///
/// No retry, caching or de-duplication happens behind this trait; callers
/// enforce single-flight themselves.
#[trait_variant::make(AnalysisGateway: Send)]
pub trait LocalAnalysisGateway {
    /// POST `inputs` as a JSON object to `endpoint_path` and return the
    /// decoded reply or the classified failure.
    async fn invoke(
        &self,
        endpoint_path: &str,
        inputs: &RequestInputs,
    ) -> Result<RawPayload, GatewayError>;
}
