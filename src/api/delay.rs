//! src/api/delay.rs

use std::time::Duration;

/// Suspend the current task for at least `duration`, simulating network latency.
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}
