use serde_json::{json, Value};

use super::{fields, DecodeError, EntityCodec};
use crate::clinic::domain::Visit;

/// `{"id", "petId", "date", "description"}`
impl EntityCodec for Visit {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let obj = fields::object(value)?;
        Ok(Visit {
            id: fields::optional_id(obj, "id")?,
            pet_id: fields::required_int(obj, "petId")?,
            date: fields::required_date(obj, "date")?,
            description: fields::optional_str(obj, "description")?,
        })
    }

    fn encode(&self) -> Value {
        json!({
            "id": self.id,
            "petId": self.pet_id,
            "date": fields::format_date(self.date),
            "description": self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn decodes_visit() {
        let visit = Visit::decode(&json!({
            "id": 5,
            "petId": 7,
            "date": "2013/01/01",
            "description": "rabies shot"
        }))
        .unwrap();
        assert_eq!(
            visit,
            Visit {
                id: Some(5),
                pet_id: 7,
                date: NaiveDate::from_ymd_opt(2013, 1, 1).unwrap(),
                description: Some("rabies shot".into()),
            }
        );
    }

    #[test]
    fn unset_identity_for_zero_or_absent_id() {
        let zero = Visit::decode(&json!({"id": 0, "petId": 7, "date": "2013/01/01", "description": null})).unwrap();
        assert_eq!(zero.id, None);
        assert_eq!(zero.description, None);
        let absent = Visit::decode(&json!({"petId": 7, "date": "2013/01/01"})).unwrap();
        assert_eq!(absent.id, None);
    }

    #[test]
    fn wrong_separator_fails() {
        let err = Visit::decode(&json!({"id": 1, "petId": 7, "date": "2016-13-45", "description": "x"})).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidDate { field: "date", .. }), "{err}");
    }

    #[test]
    fn out_of_range_month_fails() {
        let err = Visit::decode(&json!({"petId": 7, "date": "2016/13/01"})).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidDate { source: fields::DateParseError::Calendar(_), .. }));
    }

    #[test]
    fn pet_id_and_date_are_required() {
        assert!(matches!(
            Visit::decode(&json!({"date": "2013/01/01"})),
            Err(DecodeError::MissingField("petId"))
        ));
        assert!(matches!(Visit::decode(&json!({"petId": 1})), Err(DecodeError::MissingField("date"))));
        assert!(matches!(Visit::decode(&json!({"petId": 1, "date": 20130101})), Err(DecodeError::InvalidType { .. })));
        assert!(matches!(Visit::decode(&json!([1])), Err(DecodeError::NotAnObject)));
    }

    #[test]
    fn date_round_trips_exactly() {
        for text in ["2013/01/01", "1999/12/31", "2016/02/29", "0001/01/01", "9999/12/31"] {
            let visit = Visit::decode(&json!({"petId": 1, "date": text})).unwrap();
            assert_eq!(visit.encode()["date"], text);
        }
    }
}
