use std::sync::Arc;

use teloxide::Bot;

use tglens_core::config::Config;
use tglens_http::AppState;
use tglens_telegram::TelegramDirectory;

#[tokio::main]
async fn main() -> Result<(), tglens_core::Error> {
    tglens_core::logging::init("tglens")?;

    let cfg = Arc::new(Config::load()?);

    let bot = Bot::new(cfg.bot_token.clone());
    let directory = Arc::new(TelegramDirectory::new(bot));

    tglens_http::run_server(AppState { cfg, directory })
        .await
        .map_err(|e| tglens_core::Error::Upstream(format!("http server failed: {e}")))?;

    Ok(())
}
