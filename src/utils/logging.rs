//! Utilitas logging
//!
//! Log ditulis ke stderr; stdout hanya untuk tampilan form.

use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Pasang subscriber `tracing`.
///
/// `RUST_LOG` selalu menang; tanpa itu level default `info`, atau `debug`
/// jika `verbose` aktif. Aman dipanggil lebih dari sekali.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Catat informasi awal program
///
/// # Parameter
/// - `config`: konfigurasi yang dipakai
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Prediksi Diabetes - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 Endpoint: {}", config.api_url);
    if let Some(path) = &config.config_file {
        info!("📄 Konfigurasi dari: {}", path.display());
    }
    info!("{}", "=".repeat(60));
}

/// Potong teks panjang untuk ditampilkan di log
///
/// # Parameter
/// - `text`: teks asli
/// - `max_len`: jumlah karakter maksimum
///
/// # Return
/// Teks yang sudah dipotong (diakhiri "..." jika terpotong)
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
