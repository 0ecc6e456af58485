use super::field::Field;

/// Isi mentah form (teks) untuk kedelapan field
///
/// Selalu berisi kedelapan field. Nilainya teks bebas sampai saat submit;
/// konversi dan validasi baru dilakukan oleh orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord {
    values: [String; Field::COUNT],
}

impl FormRecord {
    /// Form kosong (semua field "")
    pub fn new() -> Self {
        Self::default()
    }

    /// Ambil teks mentah sebuah field
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Ganti teks mentah sebuah field.
    ///
    /// Hanya dipanggil oleh `FieldStore` dan loader; di luar crate record hanya
    /// bisa dibaca atau dibangun lewat `from_pairs`.
    pub(crate) fn set(&mut self, field: Field, text: impl Into<String>) {
        self.values[field.index()] = text.into();
    }

    /// Bangun record dari pasangan (field, teks); field yang tidak disebut tetap kosong
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Field, S)>,
        S: Into<String>,
    {
        let mut record = Self::new();
        for (field, text) in pairs {
            record.set(field, text);
        }
        record
    }

    /// Iterasi (field, teks) sesuai urutan deklarasi
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Field yang masih kosong (atau hanya spasi), sesuai urutan deklarasi
    pub fn missing_fields(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, text)| text.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }
}
