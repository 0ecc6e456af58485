use super::prediction::Prediction;

/// Fase submit saat ini; tepat satu yang aktif
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Belum pernah submit
    #[default]
    Idle,
    /// Request sedang berjalan
    Pending,
    /// Gagal (validasi, jaringan atau server); berisi pesan untuk pengguna
    Failed(String),
    /// Berhasil; berisi respons server apa adanya
    Succeeded(Prediction),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    /// Pesan error (hanya untuk `Failed`)
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Hasil prediksi (hanya untuk `Succeeded`)
    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            SubmissionState::Succeeded(prediction) => Some(prediction),
            _ => None,
        }
    }
}

/// Hasil satu panggilan `submit`
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Percobaan selesai dan state sudah diperbarui
    Settled(SubmissionState),
    /// Ditolak karena masih ada request yang berjalan
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_follow_variant() {
        assert!(!SubmissionState::Idle.is_pending());
        assert!(SubmissionState::Pending.is_pending());

        let failed = SubmissionState::Failed("oops".to_string());
        assert_eq!(failed.error_message(), Some("oops"));
        assert!(failed.prediction().is_none());

        let prediction = Prediction::from_value(json!({"prediction": 1})).unwrap();
        let succeeded = SubmissionState::Succeeded(prediction.clone());
        assert_eq!(succeeded.prediction(), Some(&prediction));
        assert!(succeeded.error_message().is_none());
    }
}
