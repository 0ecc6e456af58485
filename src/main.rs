use anyhow::Result;
use prediksi_diabetes::utils::logging;
use prediksi_diabetes::{App, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // konfigurasi dulu: level log bergantung padanya
    let config = Config::load()?;

    logging::init(config.verbose_logging);

    let app = App::initialize(config)?;
    app.run().await
}
