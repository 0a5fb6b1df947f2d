use std::collections::BTreeMap;

use crate::field::Field;

/// Known numeric values keyed by field.
///
/// Iteration follows the canonical field order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldValues(BTreeMap<Field, f64>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: Field, value: f64) -> Option<f64> {
        self.0.insert(field, value)
    }

    pub fn remove(&mut self, field: Field) -> Option<f64> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        self.0.iter().map(|(f, v)| (*f, *v))
    }
}

impl FromIterator<(Field, f64)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (Field, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_field_order() {
        let values = FieldValues::new()
            .with(Field::Amount, 1.0)
            .with(Field::Principal, 2.0)
            .with(Field::Time, 3.0);
        let order: Vec<Field> = values.iter().map(|(f, _)| f).collect();
        assert_eq!(order, vec![Field::Principal, Field::Time, Field::Amount]);
    }

    #[test]
    fn insert_replaces() {
        let mut values = FieldValues::new();
        assert_eq!(values.insert(Field::Rate, 5.0), None);
        assert_eq!(values.insert(Field::Rate, 6.0), Some(5.0));
        assert_eq!(values.get(Field::Rate), Some(6.0));
        assert_eq!(values.remove(Field::Rate), Some(6.0));
        assert!(values.is_empty());
    }
}
