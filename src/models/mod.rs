pub mod field;
pub mod loaders;
pub mod payload;
pub mod prediction;
pub mod record;
pub mod state;

pub use field::Field;
pub use loaders::{load_record_from_toml, parse_record};
pub use payload::{coerce_number, PredictionPayload};
pub use prediction::Prediction;
pub use record::FormRecord;
pub use state::{SubmissionState, SubmitOutcome};
