//! Decoder for a JSON list of labeled source/destination records.

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::domain::Itinerary;

use super::{DecodeError, PayloadDecoder, build_leg};

/// One entry of the records payload.
///
/// Missing fields decode as empty so they are reported as empty tokens
/// with their leg position rather than as an opaque JSON error.
#[derive(Debug, Deserialize)]
struct LegRecord {
    #[serde(default)]
    source: String,
    #[serde(default)]
    destination: String,
}

/// Decodes `[{"source":"IND","destination":"EWR"}, ...]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordsDecoder;

impl JsonRecordsDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }
}

impl PayloadDecoder for JsonRecordsDecoder {
    fn decode(&self, raw: &[u8], cancel: &CancellationToken) -> Result<Itinerary, DecodeError> {
        let records: Vec<LegRecord> = serde_json::from_slice(raw)?;

        records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                if cancel.is_cancelled() {
                    return Err(DecodeError::Cancelled);
                }
                build_leg(idx, record.source, record.destination)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Itinerary::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Airport, Leg};

    fn leg(from: &str, to: &str) -> Leg {
        Leg::new(Airport::new(from).unwrap(), Airport::new(to).unwrap())
    }

    fn decode(raw: &str) -> Result<Itinerary, DecodeError> {
        JsonRecordsDecoder::new().decode(raw.as_bytes(), &CancellationToken::new())
    }

    #[test]
    fn decodes_two_legs() {
        let itinerary = decode(
            r#"[{"source":"IND","destination":"EWR"},{"source":"SFO","destination":"ATL"}]"#,
        )
        .unwrap();

        assert_eq!(
            itinerary,
            Itinerary::new(vec![leg("IND", "EWR"), leg("SFO", "ATL")])
        );
    }

    #[test]
    fn decodes_empty_list() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn ignores_unknown_fields() {
        let itinerary =
            decode(r#"[{"source":"IND","destination":"EWR","carrier":"UA"}]"#).unwrap();
        assert_eq!(itinerary.len(), 1);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(decode("invalid json"), Err(DecodeError::Json(_))));
    }

    #[test]
    fn rejects_pairs_shape() {
        assert!(matches!(
            decode(r#"[["IND","EWR"]]"#),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn rejects_empty_source() {
        let result = decode(
            r#"[{"source":"IND","destination":"EWR"},{"source":"","destination":"ATL"}]"#,
        );
        assert!(matches!(result, Err(DecodeError::EmptySource { leg: 1 })));
    }

    #[test]
    fn rejects_missing_destination() {
        let result = decode(r#"[{"source":"IND"}]"#);
        assert!(matches!(
            result,
            Err(DecodeError::EmptyDestination { leg: 0 })
        ));
    }

    #[test]
    fn stops_when_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = JsonRecordsDecoder::new().decode(
            br#"[{"source":"IND","destination":"EWR"}]"#,
            &cancel,
        );
        assert!(matches!(result, Err(DecodeError::Cancelled)));
    }
}
