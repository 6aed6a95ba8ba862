/*
[INPUT]:  None (read-only probe)
[OUTPUT]: Backend liveness snapshot
[POS]:    HTTP layer - health endpoint
[UPDATE]: When the health response format changes
*/

use crate::http::{Result, TaskboardClient};
use crate::types::HealthCheck;
use reqwest::Method;

impl TaskboardClient {
    /// Probe backend liveness. Single attempt, no retry.
    ///
    /// GET {base}/health
    pub async fn get_health(&self) -> Result<HealthCheck> {
        let builder = self.request(Method::GET, "/health")?;
        self.send_json(builder).await
    }
}
