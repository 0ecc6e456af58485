//! # Prediksi Diabetes
//!
//! Form delapan fitur klinis yang dikirim ke layanan prediksi lewat HTTP,
//! lalu hasil klasifikasinya ditampilkan.
//!
//! ## Arsitektur
//!
//! ### ① Infrastruktur (`infrastructure/`)
//! - `Transport` - kemampuan "POST JSON", `ReqwestTransport` untuk produksi
//!
//! ### ② Model (`models/`)
//! - `Field`, `FormRecord` - isi form mentah (teks)
//! - `PredictionPayload` - body request yang sudah dikonversi dan divalidasi
//! - `Prediction`, `SubmissionState` - hasil dan fase submit
//!
//! ### ③ Kemampuan (`services/`)
//! - `FieldStore` - pemilik isi form, mengabarkan setiap perubahan
//!
//! ### ④ Orkestrasi (`orchestrator/`)
//! - `SubmissionOrchestrator` - validasi, request async, klasifikasi error
//! - `App` - sesi terminal yang menghubungkan semuanya
//!
//! ### ⑤ Tampilan (`view/`)
//! - `ViewModel` + `render` - gambaran form dan hasil sebagai teks

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod view;

// ekspor ulang tipe yang sering dipakai
pub use config::Config;
pub use error::{FieldError, SubmitError, TransportError};
pub use infrastructure::{RawResponse, ReqwestTransport, Transport};
pub use models::{Field, FormRecord, Prediction, PredictionPayload, SubmissionState, SubmitOutcome};
pub use orchestrator::{App, SubmissionOrchestrator};
pub use services::FieldStore;
