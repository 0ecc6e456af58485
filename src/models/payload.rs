use serde::ser::{Serialize, SerializeMap, Serializer};

use super::field::Field;
use super::record::FormRecord;
use crate::error::SubmitError;

/// Body request ke layanan prediksi
///
/// Hanya bisa dibuat dari `FormRecord` yang semua nilainya angka berhingga.
/// Diserialisasi sebagai objek JSON dengan delapan key sesuai urutan deklarasi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionPayload {
    values: [f64; Field::COUNT],
}

impl PredictionPayload {
    /// Konversi + validasi record.
    ///
    /// Field yang gagal dikonversi pertama (sesuai urutan deklarasi) dilaporkan
    /// sebagai `SubmitError::Validation`.
    pub fn try_from_record(record: &FormRecord) -> Result<Self, SubmitError> {
        let mut values = [0.0; Field::COUNT];
        for (field, text) in record.iter() {
            values[field.index()] =
                coerce_number(text).ok_or(SubmitError::Validation { field })?;
        }

        Ok(Self { values })
    }

    /// Nilai numerik sebuah field
    pub fn get(&self, field: Field) -> f64 {
        self.values[field.index()]
    }

    /// Iterasi (field, nilai) sesuai urutan deklarasi
    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

impl Serialize for PredictionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            // bilangan bulat dikirim tanpa ".0", sama seperti JSON dari browser
            if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
                map.serialize_entry(field.name(), &(value as i64))?;
            } else {
                map.serialize_entry(field.name(), &value)?;
            }
        }
        map.end()
    }
}

/// Konversi teks ke angka desimal.
///
/// Menerima tanda minus/plus, titik desimal dan notasi eksponen. Teks kosong,
/// bukan angka, atau hasil tak berhingga menghasilkan `None` (penanda NaN).
pub fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
