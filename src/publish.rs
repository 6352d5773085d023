//! Publish orchestration
//!
//! Asks the operator about each network in turn and runs the matching
//! publisher. Attempts are independent: a skip or failure on one network
//! never stops the next.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, info, warn};

use crate::api::{PublishOutcome, Publisher};
use crate::error::PromptError;
use crate::models::{Network, PostContent};
use crate::prompt::Prompter;

/// Exit status when at least one network attempt errored
pub const EXIT_PUBLISH_FAILED: u8 = 2;

/// Result of one network's turn
#[derive(Debug)]
pub enum NetworkStatus {
    /// The operator declined
    Skipped,
    /// The publisher ran and the network answered
    Done(PublishOutcome),
    /// The publisher could not complete (login, transport, bad response)
    Failed(String),
}

/// Per-network results, in prompting order
#[derive(Debug, Default)]
pub struct PublishReport {
    entries: Vec<(Network, NetworkStatus)>,
}

impl PublishReport {
    /// Entries in the order the networks were handled
    pub fn entries(&self) -> &[(Network, NetworkStatus)] {
        &self.entries
    }

    /// Status for a given network, if it was handled
    pub fn status(&self, network: Network) -> Option<&NetworkStatus> {
        self.entries
            .iter()
            .find(|(n, _)| *n == network)
            .map(|(_, status)| status)
    }

    /// Whether any attempt ended in an error
    pub fn has_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, status)| matches!(status, NetworkStatus::Failed(_)))
    }

    /// Process exit status for this run
    ///
    /// Rejections alone keep 0; only attempts that errored give
    /// [`EXIT_PUBLISH_FAILED`].
    pub fn exit_status(&self) -> u8 {
        if self.has_failures() { EXIT_PUBLISH_FAILED } else { 0 }
    }

    /// Whether any network answered with a rejection
    pub fn has_rejections(&self) -> bool {
        self.entries.iter().any(|(_, status)| {
            matches!(status, NetworkStatus::Done(PublishOutcome::Rejected { .. }))
        })
    }

    /// One human readable line per network
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(network, status)| {
                let detail = match status {
                    NetworkStatus::Skipped => "skipped".to_string(),
                    NetworkStatus::Done(PublishOutcome::Published { reference: Some(r) }) => {
                        format!("✓ posted ({})", r)
                    }
                    NetworkStatus::Done(PublishOutcome::Published { reference: None }) => {
                        "✓ posted".to_string()
                    }
                    NetworkStatus::Done(PublishOutcome::Rejected { status, .. }) => {
                        format!("⚠ rejected with HTTP {} (see logs)", status)
                    }
                    NetworkStatus::Failed(reason) => format!("✗ failed: {}", reason),
                };
                format!("{} {}: {}", network.emoji(), network.name(), detail)
            })
            .collect()
    }
}

/// Ask about each publisher in order and publish where confirmed
pub async fn run<P, R, W>(
    prompter: &mut Prompter<R, W>,
    content: &PostContent,
    publishers: &[P],
) -> Result<PublishReport, PromptError>
where
    P: Publisher,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut report = PublishReport::default();

    for publisher in publishers {
        let network = publisher.network();

        if !prompter.confirm(&format!("Post to {}", network)).await? {
            info!("Skipping {}", network);
            report.entries.push((network, NetworkStatus::Skipped));
            continue;
        }

        let status = match publisher.publish(content).await {
            Ok(outcome) => {
                match &outcome {
                    PublishOutcome::Published { reference } => {
                        info!("Published to {} ({:?})", network, reference);
                    }
                    PublishOutcome::Rejected { status, .. } => {
                        warn!("{} answered with HTTP {}", network, status);
                    }
                }
                NetworkStatus::Done(outcome)
            }
            Err(e) => {
                error!("Publishing to {} failed: {}", network, e);
                NetworkStatus::Failed(e.to_string())
            }
        };
        report.entries.push((network, status));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Client;
    use crate::config::Config;
    use crate::error::PublishError;
    use std::cell::Cell;
    use tokio::io::BufReader;
    use tokio_test::io::Builder;

    /// Publisher double that records calls and returns a canned result
    struct FakePublisher {
        network: Network,
        fail: bool,
        calls: Cell<usize>,
    }

    impl FakePublisher {
        fn new(network: Network, fail: bool) -> Self {
            Self {
                network,
                fail,
                calls: Cell::new(0),
            }
        }
    }

    impl Publisher for FakePublisher {
        fn network(&self) -> Network {
            self.network
        }

        async fn publish(&self, _content: &PostContent) -> Result<PublishOutcome, PublishError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(PublishError::Authentication("bad password".into()))
            } else {
                Ok(PublishOutcome::Published { reference: None })
            }
        }
    }

    fn sample() -> PostContent {
        PostContent::new("Nice find!", "#history #tech", "https://example.com/a", "Example")
            .unwrap()
    }

    fn prompter(script: &[&[u8]]) -> Prompter<BufReader<tokio_test::io::Mock>, Vec<u8>> {
        let mut builder = Builder::new();
        for chunk in script {
            builder.read(chunk);
        }
        Prompter::new(BufReader::new(builder.build()), Vec::new())
    }

    #[tokio::test]
    async fn test_skip_one_publish_other() {
        let publishers = [
            FakePublisher::new(Network::LinkedIn, false),
            FakePublisher::new(Network::Bluesky, false),
        ];
        let mut p = prompter(&[b"n\n", b"yes\n"]);

        let report = run(&mut p, &sample(), &publishers).await.unwrap();

        assert_eq!(publishers[0].calls.get(), 0);
        assert_eq!(publishers[1].calls.get(), 1);
        assert!(matches!(report.status(Network::LinkedIn), Some(NetworkStatus::Skipped)));
        assert_eq!(report.exit_status(), 0);
        assert!(matches!(
            report.status(Network::Bluesky),
            Some(NetworkStatus::Done(PublishOutcome::Published { .. }))
        ));

        let printed = String::from_utf8(p.into_writer()).unwrap();
        let linkedin_at = printed.find("Post to LinkedIn (y/n)? ").unwrap();
        let bluesky_at = printed.find("Post to Bluesky (y/n)? ").unwrap();
        assert!(linkedin_at < bluesky_at);
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_next_network() {
        let publishers = [
            FakePublisher::new(Network::Bluesky, true),
            FakePublisher::new(Network::LinkedIn, false),
        ];
        let mut p = prompter(&[b"y\n", b"y\n"]);

        let report = run(&mut p, &sample(), &publishers).await.unwrap();

        assert_eq!(publishers[1].calls.get(), 1);
        assert!(report.has_failures());
        assert!(!report.has_rejections());
        assert_eq!(report.exit_status(), EXIT_PUBLISH_FAILED);
        assert_eq!(report.entries().len(), 2);
        assert!(report.lines()[0].contains("bad password"));
    }

    #[test]
    fn test_rejection_alone_exits_zero() {
        let report = PublishReport {
            entries: vec![
                (
                    Network::LinkedIn,
                    NetworkStatus::Done(PublishOutcome::Rejected {
                        status: 422,
                        body: String::new(),
                    }),
                ),
                (Network::Bluesky, NetworkStatus::Skipped),
            ],
        };
        assert!(report.has_rejections());
        assert_eq!(report.exit_status(), 0);
        assert_eq!(report.lines()[0], "💼 LinkedIn: ⚠ rejected with HTTP 422 (see logs)");
    }

    #[tokio::test]
    async fn test_real_clients_against_mock_servers() {
        let mut linkedin = mockito::Server::new_async().await;
        let mut bluesky = mockito::Server::new_async().await;

        let ugc = linkedin
            .mock("POST", "/v2/ugcPosts")
            .with_status(422)
            .with_body("duplicate")
            .create_async()
            .await;
        let login = bluesky
            .mock("POST", "/xrpc/com.atproto.server.createSession")
            .with_status(401)
            .create_async()
            .await;
        let create = bluesky
            .mock("POST", "/xrpc/com.atproto.repo.createRecord")
            .expect(0)
            .create_async()
            .await;

        let (li_url, bs_url) = (linkedin.url(), bluesky.url());
        let config = Config::from_lookup(|key| match key {
            "LINKEDIN_AUTHOR" => Some("urn:li:person:42".into()),
            "LINKEDIN_TOKEN" => Some("tok".into()),
            "BSKY_USER" => Some("me.bsky.social".into()),
            "BSKY_PASS" => Some("wrong".into()),
            "LINKEDIN_API_URL" => Some(li_url.clone()),
            "BSKY_PDS_URL" => Some(bs_url.clone()),
            _ => None,
        })
        .unwrap();
        let clients = Client::all(&config).unwrap();
        let mut p = prompter(&[b"y\n", b"Y\n"]);

        let report = run(&mut p, &sample(), &clients).await.unwrap();

        ugc.assert_async().await;
        login.assert_async().await;
        create.assert_async().await;
        assert!(report.has_rejections());
        assert!(matches!(report.status(Network::Bluesky), Some(NetworkStatus::Failed(_))));
        assert_eq!(report.exit_status(), EXIT_PUBLISH_FAILED);
    }
}
