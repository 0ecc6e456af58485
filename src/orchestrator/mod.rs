//! Lapisan orkestrasi
//!
//! ## Modul
//!
//! ### `submission` - Submission Orchestrator
//! - konversi + validasi isi form
//! - mengatur fase Idle / Pending / Failed / Succeeded
//! - klasifikasi hasil request (jaringan / server / sukses)
//!
//! ### `app` - sesi terminal
//! - membaca perintah pengguna dari stdin
//! - meneruskan edit ke `FieldStore`, submit ke `SubmissionOrchestrator`
//! - menggambar ulang setiap ada notifikasi perubahan
//!
//! ```text
//! app (stdin / stdout)
//!     ↓ edit              ↓ submit (salinan record)
//! services::FieldStore   submission::SubmissionOrchestrator
//!                             ↓
//!                         infrastructure::Transport
//! ```

pub mod app;
pub mod submission;

pub use app::App;
pub use submission::{classify_response, SubmissionOrchestrator};
