use std::time::Duration;

/// Fixed-delay rate-limit policy applied after every search request,
/// regardless of outcome. Deliberately not adaptive.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    interval: Duration,
}

impl FixedDelay {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub async fn pause(&self) {
        tokio::time::sleep(self.interval).await;
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::from_millis(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn pause_waits_at_least_the_interval() {
        let throttle = FixedDelay::from_millis(10);
        let start = Instant::now();
        throttle.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
