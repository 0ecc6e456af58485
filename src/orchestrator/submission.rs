//! Orkestrasi submit - lapisan alur
//!
//! ## Alur satu percobaan
//!
//! 1. Konversi teks field ke angka, validasi sesuai urutan deklarasi
//! 2. State → `Pending` (menghapus hasil/error sebelumnya)
//! 3. POST payload JSON lewat `Transport`
//! 4. Klasifikasi hasil: jaringan gagal / server gagal / sukses
//!
//! Validasi gagal tidak pernah masuk `Pending` dan tidak menyentuh jaringan.
//! Selama `Pending`, submit berikutnya ditolak sehingga paling banyak ada
//! satu request yang berjalan.

use serde_json::Value as JsonValue;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::SubmitError;
use crate::infrastructure::{RawResponse, Transport};
use crate::models::{FormRecord, Prediction, PredictionPayload, SubmissionState, SubmitOutcome};
use crate::utils::logging::truncate_text;

/// Submission Orchestrator
///
/// Satu-satunya pemilik `SubmissionState`. Endpoint diberikan saat konstruksi.
pub struct SubmissionOrchestrator<T> {
    transport: T,
    endpoint: String,
    state: watch::Sender<SubmissionState>,
}

impl<T: Transport> SubmissionOrchestrator<T> {
    /// Buat orchestrator untuk endpoint tertentu
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            transport,
            endpoint: endpoint.into(),
            state,
        }
    }

    /// Buat orchestrator dengan endpoint dari konfigurasi
    pub fn from_config(transport: T, config: &Config) -> Self {
        Self::new(transport, config.api_url.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Salinan state saat ini
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// Berlangganan notifikasi perubahan state
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Submit isi form.
    ///
    /// # Parameter
    /// - `record`: salinan isi form saat submit
    ///
    /// # Return
    /// `Settled(state)` berisi state akhir percobaan ini, atau `Rejected` jika
    /// masih ada request yang berjalan (state tidak diubah).
    pub async fn submit(&self, record: FormRecord) -> SubmitOutcome {
        let attempt = PredictionPayload::try_from_record(&record);

        // cek pending + set state dalam satu langkah
        let mut rejected = false;
        self.state.send_if_modified(|state| {
            if state.is_pending() {
                rejected = true;
                return false;
            }
            *state = match &attempt {
                Ok(_) => SubmissionState::Pending,
                Err(err) => SubmissionState::Failed(err.to_string()),
            };
            true
        });

        if rejected {
            warn!("⏳ Masih ada request yang berjalan, submit diabaikan");
            return SubmitOutcome::Rejected;
        }

        let payload = match attempt {
            Ok(payload) => payload,
            Err(err) => {
                warn!("⚠️ Validasi gagal: {}", err);
                return SubmitOutcome::Settled(SubmissionState::Failed(err.to_string()));
            }
        };

        let mut guard = SettleGuard {
            state: &self.state,
            settled: false,
        };

        info!("📤 Mengirim data ke {}", self.endpoint);

        let next = match self.dispatch(&payload).await {
            Ok(prediction) => {
                info!("✓ Prediksi diterima: {}", prediction.body());
                SubmissionState::Succeeded(prediction)
            }
            Err(err) => {
                log_failure(&err);
                SubmissionState::Failed(err.to_string())
            }
        };

        self.state.send_replace(next.clone());
        guard.settled = true;

        SubmitOutcome::Settled(next)
    }

    async fn dispatch(&self, payload: &PredictionPayload) -> Result<Prediction, SubmitError> {
        let response = self
            .transport
            .post_json(&self.endpoint, payload)
            .await
            .map_err(SubmitError::Transport)?;

        classify_response(response)
    }
}

/// Klasifikasi respons server
///
/// - non-2xx → `SubmitError::Server`
/// - 2xx dengan body objek JSON → `Prediction`
/// - 2xx dengan body lain → `SubmitError::MalformedResponse`
pub fn classify_response(response: RawResponse) -> Result<Prediction, SubmitError> {
    if !response.is_success() {
        return Err(SubmitError::server(response.status, &response.body));
    }

    serde_json::from_str::<JsonValue>(&response.body)
        .ok()
        .and_then(Prediction::from_value)
        .ok_or_else(|| SubmitError::malformed(response.status, &response.body))
}

fn log_failure(err: &SubmitError) {
    match err {
        SubmitError::Transport(source) => error!("❌ Gagal menghubungi API: {}", source),
        SubmitError::Server { status, body } | SubmitError::MalformedResponse { status, body } => {
            warn!("❌ Server {} membalas: {}", status, truncate_text(body, 200))
        }
        SubmitError::Validation { .. } => warn!("⚠️ {}", err),
    }
}

/// Jika future submit di-drop sebelum selesai, kembalikan state ke `Idle`
/// agar submit berikutnya tidak tertahan.
struct SettleGuard<'a> {
    state: &'a watch::Sender<SubmissionState>,
    settled: bool,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.state.send_if_modified(|state| {
                if state.is_pending() {
                    *state = SubmissionState::Idle;
                    true
                } else {
                    false
                }
            });
        }
    }
}
