use sendreq::api::client::ApiClient;
use sendreq::config::SenderConfig;
use sendreq::error::SendError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), SendError> {
    sendreq::utils::init_logger();

    let client = ApiClient::new(&SenderConfig::default())?;
    let stdout = std::io::stdout();
    sendreq::app::run(&client, &mut stdout.lock()).await?;
    Ok(())
}
