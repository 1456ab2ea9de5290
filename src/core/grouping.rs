//! Category grouping
//!
//! Partitions subcategories by the *name* of their embedded category. Two
//! categories with different ids but the same name end up in one group.
//!
//! The groups live in a `HashMap`, whose iteration order is unspecified, so
//! the distinct names are sorted once (byte-wise ascending) and all iteration
//! goes through that sorted list.

use crate::types::Subcategory;
use std::collections::HashMap;

/// Subcategories grouped by category name
///
/// Borrows from the record set; built fresh for every grouped report.
#[derive(Debug)]
pub struct CategoryGroups<'a> {
    groups: HashMap<&'a str, Vec<&'a Subcategory>>,
    names: Vec<&'a str>,
}

impl<'a> CategoryGroups<'a> {
    /// Group `records` by category name
    ///
    /// Members keep their relative input order inside each group.
    pub fn build(records: &'a [Subcategory]) -> Self {
        let mut groups: HashMap<&'a str, Vec<&'a Subcategory>> = HashMap::new();
        for record in records {
            groups
                .entry(record.category.name.as_str())
                .or_default()
                .push(record);
        }

        let mut names: Vec<&'a str> = groups.keys().copied().collect();
        names.sort_unstable();

        CategoryGroups { groups, names }
    }

    /// Distinct category names in ascending order
    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    /// Members of the named group, in input order
    pub fn members(&self, name: &str) -> &[&'a Subcategory] {
        self.groups.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(name, members)` pairs in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a Subcategory])> + '_ {
        self.names.iter().map(move |&name| (name, self.members(name)))
    }

    /// Number of distinct category names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use rstest::rstest;

    fn sub(id: &str, name: &str, category_id: &str, category_name: &str) -> Subcategory {
        Subcategory::new(id, name, Category::new(category_id, category_name))
    }

    #[test]
    fn test_groups_empty_record_set() {
        let records: Vec<Subcategory> = Vec::new();
        let groups = CategoryGroups::build(&records);

        assert!(groups.is_empty());
        assert_eq!(groups.iter().count(), 0);
    }

    #[rstest]
    #[case::already_sorted(&["Fruit", "Vegetable"], &["Fruit", "Vegetable"])]
    #[case::reversed(&["Vegetable", "Fruit"], &["Fruit", "Vegetable"])]
    #[case::uppercase_before_lowercase(&["apple", "Banana", "cherry"], &["Banana", "apple", "cherry"])]
    #[case::repeated(&["B", "A", "B", "A"], &["A", "B"])]
    #[case::empty_name(&["x", ""], &["", "x"])]
    fn test_names_sorted_bytewise(#[case] input: &[&str], #[case] expected: &[&str]) {
        let records: Vec<Subcategory> = input
            .iter()
            .enumerate()
            .map(|(i, name)| sub(&i.to_string(), "s", "c", name))
            .collect();

        let groups = CategoryGroups::build(&records);

        assert_eq!(groups.names(), expected);
    }

    #[test]
    fn test_members_keep_input_order() {
        let records = vec![
            sub("s1", "Pears", "c1", "Fruit"),
            sub("s2", "Carrots", "c2", "Vegetable"),
            sub("s3", "Apples", "c1", "Fruit"),
            sub("s4", "Figs", "c1", "Fruit"),
        ];

        let groups = CategoryGroups::build(&records);
        let fruit: Vec<&str> = groups
            .members("Fruit")
            .iter()
            .map(|s| s.name.as_str())
            .collect();

        assert_eq!(fruit, vec!["Pears", "Apples", "Figs"]);
        assert_eq!(groups.members("Vegetable").len(), 1);
    }

    #[test]
    fn test_same_name_different_ids_merge() {
        let records = vec![
            sub("s1", "Apples", "c1", "Fruit"),
            sub("s2", "Pears", "c7", "Fruit"),
        ];

        let groups = CategoryGroups::build(&records);

        assert_eq!(groups.len(), 1);
        let ids: Vec<&str> = groups
            .members("Fruit")
            .iter()
            .map(|s| s.category.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c1", "c7"]);
    }

    #[test]
    fn test_members_of_unknown_name_is_empty() {
        let records = vec![sub("s1", "Apples", "c1", "Fruit")];
        let groups = CategoryGroups::build(&records);

        assert!(groups.members("Dairy").is_empty());
    }
}
