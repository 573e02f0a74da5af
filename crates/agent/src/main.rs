use bidder_types::BidderConfig;
use tracing::info;

// The reactor is one cooperative task; it suspends only at the poll timer
// and at receipt waits.
#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    bidder_agent::init_tracing();

    let cfg = BidderConfig::from_env()?;
    info!(
        auctioneer = %cfg.auctioneer(),
        bidder = %cfg.bidder(),
        caller = %cfg.caller(),
        call = cfg.template().signature(),
        "starting beta bundle bidder"
    );

    bidder_agent::run(cfg).await
}
