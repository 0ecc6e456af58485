use serde::Serialize;
use serde_json::Value as JsonValue;

/// Kalimat hasil untuk kemungkinan tinggi
pub const HIGH_LIKELIHOOD_SENTENCE: &str =
    "Hasil prediksi menunjukkan Anda kemungkinan tinggi terkena diabetes.";
/// Kalimat hasil untuk kemungkinan rendah
pub const LOW_LIKELIHOOD_SENTENCE: &str =
    "Hasil prediksi menunjukkan Anda kemungkinan rendah terkena diabetes.";

/// Respons sukses dari layanan prediksi, disimpan apa adanya
///
/// Selain `prediction`, semua field lain diteruskan tanpa diubah.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Prediction {
    body: JsonValue,
}

impl Prediction {
    /// Bungkus body respons. Hanya objek JSON yang diterima.
    pub fn from_value(body: JsonValue) -> Option<Self> {
        if body.is_object() {
            Some(Self { body })
        } else {
            None
        }
    }

    /// Nilai mentah field `prediction` (jika ada)
    pub fn indicator(&self) -> Option<&JsonValue> {
        self.body.get("prediction")
    }

    /// `prediction == 1` berarti kemungkinan tinggi; nilai lain (atau tidak ada) berarti rendah
    pub fn is_high_likelihood(&self) -> bool {
        self.indicator().and_then(JsonValue::as_f64) == Some(1.0)
    }

    /// Kalimat yang ditampilkan ke pengguna
    pub fn sentence(&self) -> &'static str {
        if self.is_high_likelihood() {
            HIGH_LIKELIHOOD_SENTENCE
        } else {
            LOW_LIKELIHOOD_SENTENCE
        }
    }

    /// Body respons lengkap
    pub fn body(&self) -> &JsonValue {
        &self.body
    }

    /// Dump JSON dengan indentasi 2 spasi
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_objects_are_accepted() {
        assert!(Prediction::from_value(json!({"prediction": 1})).is_some());
        assert!(Prediction::from_value(json!([1])).is_none());
        assert!(Prediction::from_value(json!("1")).is_none());
        assert!(Prediction::from_value(JsonValue::Null).is_none());
    }

    #[test]
    fn test_high_likelihood_only_for_one() {
        let high = Prediction::from_value(json!({"prediction": 1})).unwrap();
        assert!(high.is_high_likelihood());
        assert_eq!(high.sentence(), HIGH_LIKELIHOOD_SENTENCE);

        let float_one = Prediction::from_value(json!({"prediction": 1.0})).unwrap();
        assert!(float_one.is_high_likelihood());

        for other in [json!({"prediction": 0}), json!({"prediction": "1"}), json!({"prediction": 2}), json!({})] {
            let prediction = Prediction::from_value(other).unwrap();
            assert!(!prediction.is_high_likelihood());
            assert_eq!(prediction.sentence(), LOW_LIKELIHOOD_SENTENCE);
        }
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let prediction =
            Prediction::from_value(json!({"prediction": 0, "probability": 0.12, "model": "rf"}))
                .unwrap();
        assert_eq!(prediction.body()["probability"], json!(0.12));
        assert_eq!(prediction.body()["model"], json!("rf"));
        assert_eq!(
            serde_json::to_string(&prediction).unwrap(),
            r#"{"prediction":0,"probability":0.12,"model":"rf"}"#
        );
    }

    #[test]
    fn test_pretty_json_uses_two_spaces() {
        let prediction = Prediction::from_value(json!({"prediction": 1})).unwrap();
        assert_eq!(prediction.to_pretty_json(), "{\n  \"prediction\": 1\n}");
    }
}
