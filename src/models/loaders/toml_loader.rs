use crate::models::{Field, FormRecord};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Muat isi form dari file TOML
///
/// Key = nama field (persis), value = string, integer atau float.
/// Field yang tidak ada di file tetap kosong.
///
/// ```toml
/// Pregnancies = 2
/// Glucose = 138
/// BMI = "33.6"
/// ```
pub async fn load_record_from_toml(toml_file_path: &Path) -> Result<FormRecord> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("Tidak bisa membaca file TOML: {}", toml_file_path.display()))?;

    parse_record(&content)
        .with_context(|| format!("Tidak bisa mem-parse file TOML: {}", toml_file_path.display()))
}

/// Parse isi TOML menjadi `FormRecord`
pub fn parse_record(content: &str) -> Result<FormRecord> {
    let table: toml::Table = toml::from_str(content)?;

    let mut record = FormRecord::new();
    for (key, value) in table {
        let field = Field::from_name(&key)
            .with_context(|| format!("Field tidak dikenal: {}", key))?;

        let text = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            other => anyhow::bail!("Nilai field {} harus angka atau teks, bukan {}", key, other.type_str()),
        };

        tracing::debug!("preset {} = {}", field, text);
        record.set(field, text);
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_value_types() {
        let record = parse_record(
            r#"
            Pregnancies = 2
            BMI = 33.6
            Age = "47"
            "#,
        )
        .unwrap();

        assert_eq!(record.get(Field::Pregnancies), "2");
        assert_eq!(record.get(Field::Bmi), "33.6");
        assert_eq!(record.get(Field::Age), "47");
        assert_eq!(record.get(Field::Glucose), "");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse_record("Weight = 70").unwrap_err();
        assert!(err.to_string().contains("Weight"));
    }

    #[test]
    fn test_non_scalar_value_is_rejected() {
        assert!(parse_record("Glucose = [1, 2]").is_err());
        assert!(parse_record("Glucose = true").is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file_fails_with_path() {
        let path = Path::new("/nonexistent/preset.toml");
        let err = load_record_from_toml(path).await.unwrap_err();
        assert!(format!("{:#}", err).contains("preset.toml"));
    }
}
