use serde_json::{json, Value};

use super::{fields, DecodeError, EntityCodec};
use crate::clinic::domain::{Pet, PetType};

/// `{"id", "name", "birthDate", "ownerId", "type": {"id", "name"}}`
impl EntityCodec for Pet {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let obj = fields::object(value)?;
        let kind = fields::required_object(obj, "type")?;
        Ok(Pet {
            id: fields::optional_id(obj, "id")?,
            name: fields::optional_str(obj, "name")?,
            birth_date: fields::required_date(obj, "birthDate")?,
            owner_id: fields::required_int(obj, "ownerId")?,
            pet_type: PetType {
                id: Some(fields::required_int(kind, "id")?),
                name: fields::required_str(kind, "name")?,
            },
        })
    }

    fn encode(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "birthDate": fields::format_date(self.birth_date),
            "ownerId": self.owner_id,
            "type": {
                "id": self.pet_type.id,
                "name": self.pet_type.name,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::codec;

    fn rosy() -> Value {
        json!({
            "id": 3,
            "name": "Rosy",
            "birthDate": "2019/04/12",
            "ownerId": 1,
            "type": {"id": 2, "name": "dog"}
        })
    }

    #[test]
    fn decodes_full_pet() {
        let pet = Pet::decode(&rosy()).unwrap();
        assert_eq!(pet.id, Some(3));
        assert_eq!(pet.name.as_deref(), Some("Rosy"));
        assert_eq!(pet.birth_date, NaiveDate::from_ymd_opt(2019, 4, 12).unwrap());
        assert_eq!(pet.owner_id, 1);
        assert_eq!(pet.pet_type, PetType { id: Some(2), name: "dog".into() });
    }

    #[test]
    fn encode_mirrors_decode() {
        let pet = Pet::decode(&rosy()).unwrap();
        assert_eq!(pet.encode(), rosy());
    }

    #[test]
    fn null_or_missing_name_is_carried_through() {
        let mut body = rosy();
        body["name"] = Value::Null;
        assert_eq!(Pet::decode(&body).unwrap().name, None);
        body.as_object_mut().unwrap().remove("name");
        let pet = Pet::decode(&body).unwrap();
        assert_eq!(pet.name, None);
        assert!(pet.encode()["name"].is_null());
    }

    #[test]
    fn zero_or_missing_id_is_unset() {
        let mut body = rosy();
        body["id"] = json!(0);
        assert_eq!(Pet::decode(&body).unwrap().id, None);
        body.as_object_mut().unwrap().remove("id");
        assert_eq!(Pet::decode(&body).unwrap().id, None);
    }

    #[test]
    fn type_is_required() {
        let mut body = rosy();
        body.as_object_mut().unwrap().remove("type");
        assert!(matches!(Pet::decode(&body), Err(DecodeError::MissingField("type"))));
        body["type"] = json!("dog");
        assert!(matches!(Pet::decode(&body), Err(DecodeError::InvalidType { field: "type", .. })));
    }

    #[test]
    fn iso_birth_date_is_rejected() {
        let mut body = rosy();
        body["birthDate"] = json!("2019-04-12");
        assert!(matches!(Pet::decode(&body), Err(DecodeError::InvalidDate { field: "birthDate", .. })));
    }

    #[test]
    fn lists_decode_from_arrays() {
        let text = json!([rosy(), rosy()]).to_string();
        let pets: Vec<Pet> = codec::from_str(&text).unwrap();
        assert_eq!(pets.len(), 2);
        assert!(matches!(codec::from_str::<Vec<Pet>>(&rosy().to_string()), Err(DecodeError::NotAnArray)));
        assert!(matches!(codec::from_str::<Pet>("{"), Err(DecodeError::Malformed(_))));
    }
}
