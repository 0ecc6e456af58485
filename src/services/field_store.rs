//! Penyimpan isi form
//!
//! Satu-satunya pemilik `FormRecord`. Tidak melakukan validasi apa pun;
//! setiap perubahan dikabarkan ke subscriber agar tampilan digambar ulang.

use tokio::sync::watch;
use tracing::debug;

use crate::error::FieldError;
use crate::models::{Field, FormRecord};

/// Field State Manager
pub struct FieldStore {
    record: watch::Sender<FormRecord>,
}

impl FieldStore {
    /// Form kosong
    pub fn new() -> Self {
        Self::with_record(FormRecord::new())
    }

    /// Mulai dari isi tertentu
    pub fn with_record(record: FormRecord) -> Self {
        let (record, _) = watch::channel(record);
        Self { record }
    }

    /// Ganti teks sebuah field
    pub fn set_field(&self, field: Field, text: impl Into<String>) {
        let text = text.into();
        debug!("set {} = {:?}", field, text);
        self.record.send_modify(|record| record.set(field, text));
    }

    /// Ganti teks field berdasarkan nama (untuk input dari front end)
    pub fn set_field_by_name(&self, name: &str, text: impl Into<String>) -> Result<(), FieldError> {
        let field =
            Field::from_name(name).ok_or_else(|| FieldError::UnknownField(name.to_string()))?;
        self.set_field(field, text);
        Ok(())
    }

    /// Ganti seluruh isi form sekaligus (satu notifikasi)
    pub fn load_record(&self, record: FormRecord) {
        self.record.send_replace(record);
    }

    /// Kosongkan semua field
    pub fn clear(&self) {
        self.load_record(FormRecord::new());
    }

    /// Salinan isi form saat ini.
    ///
    /// Perubahan berikutnya tidak terlihat lewat salinan ini.
    pub fn current_record(&self) -> FormRecord {
        self.record.borrow().clone()
    }

    /// Berlangganan notifikasi perubahan
    pub fn subscribe(&self) -> watch::Receiver<FormRecord> {
        self.record.subscribe()
    }
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new()
    }
}
