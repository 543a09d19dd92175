use mongodb::{Database, bson::doc};
use std::time::{Duration, Instant};

/// Run the `ping` command against `db` and return the round-trip time
///
/// # Example
/// ```ignore
/// let client = connect_from_config(&config).await?;
/// let latency = ping(&client.database("store")).await?;
/// ```
pub async fn ping(db: &Database) -> Result<Duration, mongodb::error::Error> {
    let start = Instant::now();
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::Client;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_ping() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let latency = ping(&client.database("test")).await.unwrap();
        assert!(latency < Duration::from_secs(5));
    }
}
