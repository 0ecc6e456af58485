//! HTTP transport - lapisan infrastruktur
//!
//! Memegang HTTP client dan hanya mengekspos kemampuan "POST JSON".
//! Tidak tahu soal state form maupun klasifikasi error untuk pengguna.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::TransportError;
use crate::models::PredictionPayload;

/// Respons mentah: status HTTP + body sebagai teks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Status 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Kemampuan mengirim payload ke layanan prediksi
///
/// `Err` hanya untuk kegagalan transport (request tidak sampai / tidak ada
/// respons). Status gagal dari server tetap `Ok(RawResponse)`.
pub trait Transport {
    fn post_json(
        &self,
        endpoint: &str,
        payload: &PredictionPayload,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// Transport produksi berbasis `reqwest`
///
/// Tidak memasang timeout; request berjalan sampai selesai atau gagal di level koneksi.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Buat transport dengan client baru
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("prediksi-diabetes/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Pakai client yang sudah ada
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &PredictionPayload,
    ) -> Result<RawResponse, TransportError> {
        let body = serde_json::to_vec(payload)?;

        debug!("POST {} ({} bytes)", endpoint, body.len());

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::request_failed(endpoint, e))?;

        let status = response.status().as_u16();

        // body yang terputus di tengah jalan dihitung sebagai kegagalan transport
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::request_failed(endpoint, e))?;

        debug!("Respons {} dari {}", status, endpoint);

        Ok(RawResponse::new(status, text))
    }
}
