//! Serde support for the containers.
//!
//! A [`FixedArray`] serializes as a struct carrying both its capacity and its
//! live elements so that a round trip restores the original allocation, not
//! just the contents. A [`LinkedList`] serializes as a plain sequence.

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{FixedArray, LinkedList};

impl Serialize for FixedArray {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("FixedArray", 2)?;
        state.serialize_field("capacity", &self.capacity())?;
        state.serialize_field("elements", self.as_slice())?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
struct FixedArrayRepr {
    capacity: usize,
    elements: Vec<i64>,
}

impl<'de> Deserialize<'de> for FixedArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = FixedArrayRepr::deserialize(deserializer)?;
        if repr.elements.len() > repr.capacity {
            return Err(D::Error::custom(format!(
                "element count {} exceeds capacity {}",
                repr.elements.len(),
                repr.capacity
            )));
        }
        let mut array = FixedArray::with_capacity(repr.capacity).map_err(D::Error::custom)?;
        for value in repr.elements {
            array.insert_last(value).map_err(D::Error::custom)?;
        }
        Ok(array)
    }
}

impl Serialize for LinkedList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for LinkedList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<i64>::deserialize(deserializer)?;
        let mut list = LinkedList::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        Ok(list)
    }
}
