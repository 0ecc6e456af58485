/// Field input klinis
///
/// Urutan varian = urutan deklarasi form. Urutan ini dipakai untuk validasi
/// (field tidak valid pertama yang dilaporkan) dan untuk urutan key di payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigreeFunction,
    Age,
}

impl Field {
    /// Jumlah field dalam form
    pub const COUNT: usize = 8;

    /// Semua field sesuai urutan deklarasi
    pub const ALL: [Field; Field::COUNT] = [
        Field::Pregnancies,
        Field::Glucose,
        Field::BloodPressure,
        Field::SkinThickness,
        Field::Insulin,
        Field::Bmi,
        Field::DiabetesPedigreeFunction,
        Field::Age,
    ];

    /// Nama field persis seperti di label dan di body JSON
    pub fn name(self) -> &'static str {
        match self {
            Field::Pregnancies => "Pregnancies",
            Field::Glucose => "Glucose",
            Field::BloodPressure => "BloodPressure",
            Field::SkinThickness => "SkinThickness",
            Field::Insulin => "Insulin",
            Field::Bmi => "BMI",
            Field::DiabetesPedigreeFunction => "DiabetesPedigreeFunction",
            Field::Age => "Age",
        }
    }

    /// Cari field dari nama (harus sama persis)
    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Posisi field di dalam `Field::ALL`
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order_and_names() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "Pregnancies",
                "Glucose",
                "BloodPressure",
                "SkinThickness",
                "Insulin",
                "BMI",
                "DiabetesPedigreeFunction",
                "Age",
            ]
        );
    }

    #[test]
    fn test_index_matches_position() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Field::from_name("BMI"), Some(Field::Bmi));
        assert_eq!(Field::from_name("Age"), Some(Field::Age));
        assert_eq!(Field::from_name("bmi"), None);
        assert_eq!(Field::from_name("Bmi"), None);
        assert_eq!(Field::from_name(""), None);
    }
}
