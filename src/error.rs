use crate::models::Field;
use thiserror::Error;

/// Pesan tetap untuk kegagalan jaringan
pub const NETWORK_ERROR_MESSAGE: &str = "Network error, pastikan API berjalan.";

/// Error satu percobaan submit
///
/// `Display` menghasilkan pesan persis seperti yang ditampilkan ke pengguna.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Teks field tidak bisa dikonversi ke angka
    #[error("Field \"{field}\" tidak valid.")]
    Validation { field: Field },

    /// Request tidak sampai ke server / tidak ada respons
    #[error("Network error, pastikan API berjalan.")]
    Transport(#[source] TransportError),

    /// Server membalas dengan status gagal
    #[error("Server {status}: {body}")]
    Server { status: u16, body: String },

    /// Status sukses, tapi body bukan objek JSON
    #[error("Server {status}: {body}")]
    MalformedResponse { status: u16, body: String },
}

impl SubmitError {
    /// Buat error server dari status dan body mentah
    pub fn server(status: u16, raw_body: &str) -> Self {
        SubmitError::Server {
            status,
            body: render_body(raw_body),
        }
    }

    /// Buat error respons rusak dari status dan body mentah
    pub fn malformed(status: u16, raw_body: &str) -> Self {
        SubmitError::MalformedResponse {
            status,
            body: render_body(raw_body),
        }
    }
}

/// Error di lapisan transport (koneksi, DNS, body tidak terbaca)
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request ke {endpoint} gagal: {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Body payload tidak bisa diserialisasi: {0}")]
    Encode(#[from] serde_json::Error),
}

impl TransportError {
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }
}

/// Error pengisian field dari front end
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field tidak dikenal: {0}")]
    UnknownField(String),
}

/// Error konfigurasi
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Tidak bisa membaca file konfigurasi {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File konfigurasi {path} tidak valid: {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== Render body respons ==========

/// Render body respons untuk pesan error.
///
/// - bukan JSON: teks apa adanya
/// - string JSON: isi string-nya
/// - JSON lain: serialisasi JSON ringkas (urutan key dipertahankan)
pub fn render_body(raw_body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw_body) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(value) => value.to_string(),
        Err(_) => raw_body.to_string(),
    }
}
